// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Faultsite

/// Macro to create a [`SourceLocation`](crate::SourceLocation) capturing the
/// call site
///
/// The enclosing function name is recovered through `type_name` of a local
/// item, so it carries the full module path of the caller.
#[macro_export]
macro_rules! source_location {
	() => {{
		fn f() {}
		fn type_name_of<T>(_: T) -> &'static str {
			std::any::type_name::<T>()
		}
		let name = type_name_of(f);
		$crate::SourceLocation::from_static(file!(), line!(), &name[..name.len() - 3])
	}};
}

/// Macro to wrap a diagnostic into an [`Error`](crate::Error)
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::Error($diagnostic)
	};
}

/// Macro to wrap a diagnostic into an `Err(Error)`
#[macro_export]
macro_rules! err {
	($diagnostic:expr) => {
		Err($crate::Error($diagnostic))
	};
}

/// Macro to return a diagnostic as an `Err(Error)`
#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return Err($crate::Error($diagnostic))
	};
}

/// Macro to create an internal error diagnostic with automatic source
/// location capture
#[macro_export]
macro_rules! internal_error {
	($reason:expr) => {
		$crate::internal::internal($reason, $crate::source_location!())
	};
	($fmt:expr, $($arg:tt)*) => {
		$crate::internal::internal(format!($fmt, $($arg)*), $crate::source_location!())
	};
}

/// Macro to create an internal error result with automatic source location
/// capture
#[macro_export]
macro_rules! internal_err {
	($reason:expr) => {
		Err($crate::Error($crate::internal_error!($reason)))
	};
	($fmt:expr, $($arg:tt)*) => {
		Err($crate::Error($crate::internal_error!($fmt, $($arg)*)))
	};
}

/// Macro to return an internal error with automatic source location capture
#[macro_export]
macro_rules! return_internal_error {
	($reason:expr) => {
		return Err($crate::Error($crate::internal_error!($reason)))
	};
	($fmt:expr, $($arg:tt)*) => {
		return Err($crate::Error($crate::internal_error!($fmt, $($arg)*)))
	};
}
