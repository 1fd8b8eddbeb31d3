// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Faultsite

use std::fmt::Write;

use crate::diagnostic::Diagnostic;

pub trait DiagnosticRenderer {
	fn render(&self, diagnostic: &Diagnostic) -> String;
}

pub struct DefaultRenderer;

impl DiagnosticRenderer for DefaultRenderer {
	fn render(&self, diagnostic: &Diagnostic) -> String {
		let mut output = String::new();
		render_into(diagnostic, 0, &mut output);
		output
	}
}

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		DefaultRenderer.render(diagnostic)
	}
}

fn render_into(d: &Diagnostic, depth: usize, output: &mut String) {
	let indent = "  ".repeat(depth);

	let _ = writeln!(output, "{}error[{}]: {}", indent, d.code, d.message);
	let _ = writeln!(output, "{}  --> {}", indent, d.origin.description());

	if let Some(label) = &d.label {
		let _ = writeln!(output, "{}  = {}", indent, label);
	}

	if let Some(help) = &d.help {
		let _ = writeln!(output, "{}help: {}", indent, help);
	}

	for note in &d.notes {
		let _ = writeln!(output, "{}note: {}", indent, note);
	}

	if let Some(cause) = &d.cause {
		let _ = writeln!(output, "{}caused by:", indent);
		render_into(cause, depth + 1, output);
	}
}
