/*!
# Tartan: Errors.

These are build-time errors; they can only surface while declaring keys or
tuning a [`Syntax`](crate::Syntax), never during a parse. Parse-time problems
are collected as [`ParseError`](crate::ParseError) values inside
[`Results`](crate::Results) instead.
*/

use std::{
	error::Error,
	fmt,
};



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Error!
pub enum TartanError {
	/// # Empty Key Name.
	EmptyKey,

	/// # Two Long Names.
	///
	/// A paired key needs one short name; both of these are long.
	DoubleLong(String, String),

	/// # Two Short Names.
	///
	/// A paired key needs one long name; both of these are short.
	DoubleShort(String, String),

	/// # Empty Syntax Token.
	///
	/// Prefixes, separators, and triggers must be non-empty when enabled;
	/// pass `None` to disable them instead.
	EmptySyntax,
}

impl AsRef<str> for TartanError {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl Error for TartanError {}

impl fmt::Display for TartanError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::DoubleLong(a, b) => write!(f, "One of {a:?}, {b:?} must be a short name."),
			Self::DoubleShort(a, b) => write!(f, "One of {a:?}, {b:?} must be a long name."),
			_ => f.write_str(self.as_str()),
		}
	}
}

impl TartanError {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::EmptyKey => "Key names cannot be empty.",
			Self::DoubleLong(_, _) => "Paired keys require a short name.",
			Self::DoubleShort(_, _) => "Paired keys require a long name.",
			Self::EmptySyntax => "Syntax tokens cannot be empty.",
		}
	}
}
