// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Faultsite

use std::{
	fmt::{Display, Formatter},
	ops::{Deref, DerefMut},
};

use crate::{diagnostic::Diagnostic, render::DefaultRenderer};

/// The fault object. Owns the diagnostic payload and, through it, exactly
/// one source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

pub type Result<T> = std::result::Result<T, Error>;

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl DerefMut for Error {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let out = DefaultRenderer::render_string(&self.0);
		f.write_str(out.as_str())
	}
}

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}
}

impl std::error::Error for Error {}
