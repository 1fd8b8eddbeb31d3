// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Faultsite

use crate::{diagnostic::Diagnostic, error::Error};

/// Emit a structured log event for a fault
pub fn report(error: &Error) {
	report_diagnostic(&error.0)
}

/// Emit a structured log event for a diagnostic
///
/// The origin field carries the `<function> at <file>:<line>` description so
/// log consumers see the raise site without parsing the rendered report.
pub fn report_diagnostic(diagnostic: &Diagnostic) {
	tracing::error!(
		code = %diagnostic.code,
		origin = %diagnostic.origin.description(),
		"{}",
		diagnostic.message
	);
}
