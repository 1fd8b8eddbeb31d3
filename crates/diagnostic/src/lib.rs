// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Faultsite

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod diagnostic;
mod error;
mod r#macro;
mod render;
mod report;
mod source;

pub use diagnostic::{Diagnostic, internal};
pub use error::{Error, Result};
pub use render::{DefaultRenderer, DiagnosticRenderer};
pub use report::{report, report_diagnostic};
pub use source::SourceLocation;
