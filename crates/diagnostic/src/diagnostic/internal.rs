// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Faultsite

use crate::{diagnostic::Diagnostic, source::SourceLocation};

/// Diagnostic for an internal invariant violation at a known location
pub fn internal(reason: impl Into<String>, origin: SourceLocation) -> Diagnostic {
	let reason = reason.into();
	let label = format!("internal invariant violated in {}", origin.description());

	Diagnostic {
		code: "INTERNAL_ERROR".to_string(),
		message: format!("internal error: {}", reason),
		origin,
		label: Some(label),
		help: Some(
			"this is an internal error that should never occur in normal operation; \
			 please file a bug report including the location above"
				.to_string(),
		),
		notes: vec![],
		cause: None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_internal() {
		let origin = SourceLocation::new("src/engine.rs", 88, "commit");
		let diagnostic = internal("commit applied twice", origin);

		assert_eq!(diagnostic.code, "INTERNAL_ERROR");
		assert!(diagnostic.message.contains("commit applied twice"));
		assert_eq!(
			diagnostic.label.as_deref(),
			Some("internal invariant violated in commit at src/engine.rs:88")
		);
		assert!(diagnostic.help.as_ref().unwrap().contains("bug report"));
	}
}
