// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Faultsite

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Records where in source code a fault was raised.
///
/// Captured at the moment the owning fault object is constructed and owned
/// by it for the rest of its life. The fields are set exactly once; the type
/// exposes no way to change them afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
	/// File path where the fault-raising code executed
	file: String,
	/// 1-based line number within `file`
	line: u32,
	/// Name of the enclosing routine
	function: String,
}

impl SourceLocation {
	/// Create a new SourceLocation with the given values.
	///
	/// No validation is performed. A zero line number violates the caller
	/// contract but is stored as given.
	pub fn new(file: impl Into<String>, line: u32, function: impl Into<String>) -> Self {
		Self {
			file: file.into(),
			line,
			function: function.into(),
		}
	}

	/// Create a SourceLocation from static strings (used by macros)
	pub fn from_static(file: &'static str, line: u32, function: &'static str) -> Self {
		Self {
			file: file.to_string(),
			line,
			function: function.to_string(),
		}
	}

	pub fn file(&self) -> &str {
		&self.file
	}

	pub fn line(&self) -> u32 {
		self.line
	}

	pub fn function(&self) -> &str {
		&self.function
	}

	/// Render the location as `<function> at <file>:<line>`.
	///
	/// The template is fixed. Field values pass through unmodified, with no
	/// truncation or escaping.
	pub fn description(&self) -> String {
		format!("{} at {}:{}", self.function, self.file, self.line)
	}
}

impl Display for SourceLocation {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.description().as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_description() {
		let location = SourceLocation::new("main.go", 7, "Run");
		assert_eq!(location.description(), "Run at main.go:7");
	}

	#[test]
	fn test_description_empty_fields() {
		let location = SourceLocation::new("", 0, "");
		assert_eq!(location.description(), " at :0");
	}

	#[test]
	fn test_description_max_line() {
		let location = SourceLocation::new("/a/b/c.rs", u32::MAX, "handle_request");
		assert_eq!(location.description(), "handle_request at /a/b/c.rs:4294967295");
	}

	#[test]
	fn test_description_idempotent() {
		let location = SourceLocation::new("src/worker.rs", 42, "do_work");
		let first = location.description();
		let second = location.description();
		assert_eq!(first, second);
		assert_eq!(first, "do_work at src/worker.rs:42");
	}

	#[test]
	fn test_identical_inputs_identical_descriptions() {
		let a = SourceLocation::new("lib.rs", 3, "init");
		let b = SourceLocation::new("lib.rs", 3, "init");
		assert_eq!(a, b);
		assert_eq!(a.description(), b.description());
	}

	#[test]
	fn test_special_characters_pass_through() {
		let location = SourceLocation::new("dir with spaces/ファイル.rs", 9, "weird:name()");
		assert_eq!(location.description(), "weird:name() at dir with spaces/ファイル.rs:9");
	}

	#[test]
	fn test_from_static() {
		let location = SourceLocation::from_static("src/lib.rs", 1, "root");
		assert_eq!(location.file(), "src/lib.rs");
		assert_eq!(location.line(), 1);
		assert_eq!(location.function(), "root");
	}

	#[test]
	fn test_display_matches_description() {
		let location = SourceLocation::new("main.rs", 12, "main");
		assert_eq!(location.to_string(), location.description());
	}
}
