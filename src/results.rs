/*!
# Tartan: Results.
*/

use std::{
	collections::BTreeMap,
	error::Error,
	fmt,
};



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Parse Results.
///
/// Everything a parse produced: the resolved key/value pairs, the positional
/// arguments in order of appearance, any [`ParseError`]s encountered along
/// the way, and a note of where option scanning stopped early, if it did.
///
/// A fresh instance is built by — and only by — [`Parser::parse`](crate::Parser::parse);
/// from the caller's side it is read-only.
///
/// Key values are always recorded under the key's
/// [canonical name](crate::Key::canonical), so an option typed as `-v` turns
/// up under `verbose` if that long alias exists.
pub struct Results {
	/// # Positional Arguments.
	args: Vec<String>,

	/// # Resolved Keys.
	///
	/// `None` means the key was set as a bare switch (boolean true).
	keys: BTreeMap<String, Option<String>>,

	/// # Accumulated Errors.
	errors: Vec<ParseError>,

	/// # Stop Position.
	///
	/// The 1-indexed positional slot of the first argument collected after
	/// option scanning was disabled, or zero if scanning either ran to the
	/// end or nothing followed its disabling.
	stopped: usize,
}

impl Results {
	#[must_use]
	/// # Fetch a Value.
	///
	/// The query is either a key's canonical name — returning [`Value::Switch`]
	/// for a bare flag or [`Value::Text`] for a supplied value — or `@N` for
	/// the Nth (1-indexed) positional argument.
	///
	/// `None` means the key was never (successfully) set, the position is
	/// out of range, or the query is malformed.
	///
	/// ## Examples
	///
	/// ```
	/// use tartan::{Key, Parser, Value};
	///
	/// let parser = Parser::new()
	///     .with_key(Key::switch("a").unwrap());
	/// let results = parser.parse(["-a", "input.txt"]);
	///
	/// assert_eq!(results.get("a"), Some(Value::Switch));
	/// assert_eq!(results.get("@1"), Some(Value::Text("input.txt")));
	/// assert_eq!(results.get("@2"), None);
	/// assert_eq!(results.get("b"), None);
	/// ```
	pub fn get(&self, query: &str) -> Option<Value<'_>> {
		if let Some(pos) = query.strip_prefix('@') {
			let pos: usize = pos.parse().ok()?;
			self.args.get(pos.checked_sub(1)?)
				.map(|v| Value::Text(v.as_str()))
		}
		else {
			self.keys.get(query).map(|v| match v.as_deref() {
				Some(v) => Value::Text(v),
				None => Value::Switch,
			})
		}
	}

	#[must_use]
	/// # Is a Key/Position Set?
	///
	/// Same query syntax as [`Results::get`].
	pub fn contains(&self, query: &str) -> bool { self.get(query).is_some() }

	#[must_use]
	/// # Positional Arguments.
	///
	/// In order of appearance. (Queries via [`Results::get`] are 1-indexed;
	/// this slice is of course not.)
	pub fn args(&self) -> &[String] { &self.args }

	#[must_use]
	/// # Any Errors?
	pub fn has_errors(&self) -> bool { ! self.errors.is_empty() }

	#[must_use]
	/// # Accumulated Errors.
	///
	/// In order of occurrence.
	pub fn errors(&self) -> &[ParseError] { &self.errors }

	#[must_use]
	/// # Stop Position.
	///
	/// When a stop trigger or — with
	/// [`Syntax::with_stop_on_first_arg`](crate::Syntax::with_stop_on_first_arg) —
	/// a positional argument disables option scanning mid-stream, this
	/// reports the 1-indexed positional slot where the unscanned remainder
	/// begins. Zero means scanning never stopped early, or stopped on the
	/// very last token.
	pub const fn stop_position(&self) -> usize { self.stopped }
}

/// # Parse-Time Mutators.
impl Results {
	/// # Record a Positional Argument.
	pub(crate) fn push_arg(&mut self, arg: String) { self.args.push(arg); }

	/// # Record a Key.
	///
	/// `None` for a bare switch, `Some` for an attached value. The first
	/// recording of a name wins; repeats leave it untouched and log a
	/// [`ParseError::DuplicateKey`] instead.
	pub(crate) fn push_key(&mut self, name: &str, value: Option<String>) {
		if self.keys.contains_key(name) {
			self.errors.push(ParseError::DuplicateKey(name.to_owned()));
		}
		else {
			self.keys.insert(name.to_owned(), value);
		}
	}

	/// # Record an Error.
	pub(crate) fn push_error(&mut self, error: ParseError) {
		self.errors.push(error);
	}

	/// # Note Where Scanning Stopped.
	///
	/// Called ahead of the first positional collected after option scanning
	/// was disabled; later calls are no-ops.
	pub(crate) fn mark_stopped(&mut self) {
		if self.stopped == 0 { self.stopped = self.args.len() + 1; }
	}
}



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Fetched Value.
///
/// The payload returned by [`Results::get`]: either a bare switch — present,
/// boolean true — or a piece of text (a key's value or a positional
/// argument).
pub enum Value<'a> {
	/// # Switch (Boolean True).
	Switch,

	/// # Text.
	Text(&'a str),
}

impl<'a> Value<'a> {
	#[must_use]
	/// # As String Slice, If Text.
	pub const fn as_str(&self) -> Option<&'a str> {
		match *self {
			Self::Switch => None,
			Self::Text(s) => Some(s),
		}
	}

	#[must_use]
	/// # Is It a Switch?
	pub const fn is_switch(&self) -> bool { matches!(self, Self::Switch) }
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Parse Error.
///
/// Parsing is best-effort; rather than bailing at the first sign of trouble,
/// each problem is recorded as one of these and the scan moves on. The
/// offending name (or raw fragment) rides along, as does the value in the
/// one case that has one.
pub enum ParseError {
	/// # Unrecognized Key.
	///
	/// The payload is the name as typed — or, when short-option clustering
	/// is disabled, possibly the entire unprocessed tail of a cluster,
	/// reported as a single unit.
	InvalidKey(String),

	/// # Key Set More Than Once.
	///
	/// The first value stands.
	DuplicateKey(String),

	/// # Missing Value.
	///
	/// The key requires a value but none was attached and the following
	/// token (if any) was not eligible to serve as one.
	MissingValue(String),

	/// # Unexpected Value.
	///
	/// An inline value was attached to a key that doesn't take one. Holds
	/// the name and the spurned value; the key is not recorded.
	UnexpectedValue(String, String),
}

impl AsRef<str> for ParseError {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl Error for ParseError {}

impl fmt::Display for ParseError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidKey(k) => write!(f, "Invalid key: {k}"),
			Self::DuplicateKey(k) => write!(f, "Duplicate key: {k}"),
			Self::MissingValue(k) => write!(f, "Missing value for key: {k}"),
			Self::UnexpectedValue(k, v) => write!(f, "Unexpected value for key {k}: {v}"),
		}
	}
}

impl ParseError {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::InvalidKey(_) => "Invalid key.",
			Self::DuplicateKey(_) => "Duplicate key.",
			Self::MissingValue(_) => "Missing value.",
			Self::UnexpectedValue(_, _) => "Unexpected value.",
		}
	}

	#[must_use]
	/// # Offending Key/Fragment.
	pub fn key(&self) -> &str {
		match self {
			Self::InvalidKey(k)
				| Self::DuplicateKey(k)
				| Self::MissingValue(k)
				| Self::UnexpectedValue(k, _) => k,
		}
	}

	#[must_use]
	/// # Offending Value, If Any.
	pub fn value(&self) -> Option<&str> {
		match self {
			Self::UnexpectedValue(_, v) => Some(v),
			_ => None,
		}
	}
}
