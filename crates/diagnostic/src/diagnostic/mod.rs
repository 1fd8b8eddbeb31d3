// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Faultsite

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::source::SourceLocation;

pub mod internal;

/// A fault payload carrying provenance and reporting context.
///
/// Every diagnostic owns exactly one [`SourceLocation`] identifying where
/// the fault was raised. The location is supplied at construction and
/// travels with the diagnostic until it is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub origin: SourceLocation,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Diagnostic {
	pub fn new(code: impl Into<String>, message: impl Into<String>, origin: SourceLocation) -> Self {
		Self {
			code: code.into(),
			message: message.into(),
			origin,
			label: None,
			help: None,
			notes: vec![],
			cause: None,
		}
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn with_help(mut self, help: impl Into<String>) -> Self {
		self.help = Some(help.into());
		self
	}

	pub fn with_note(mut self, note: impl Into<String>) -> Self {
		self.notes.push(note.into());
		self
	}

	pub fn with_cause(mut self, cause: Diagnostic) -> Self {
		self.cause = Some(Box::new(cause));
		self
	}

	/// The location where this fault was raised
	pub fn origin(&self) -> &SourceLocation {
		&self.origin
	}
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_fmt(format_args!("{}", self.code))
	}
}
