/*!
# Tartan: Keys.
*/

use crate::TartanError;
use std::collections::BTreeMap;



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Key.
///
/// A `Key` declares one recognizable option: a name, an optional alias, and
/// whether or not a value must accompany it.
///
/// Names come in two flavors — short (exactly one character) and long
/// (anything more) — and a key may carry at most one of each, so when two
/// names are given, one must be short and the other long. The constructors
/// enforce that up front; an invalid pairing is a programming error and
/// surfaces immediately rather than at parse time.
///
/// ## Examples
///
/// ```
/// use tartan::Key;
///
/// // A boolean flag, reachable as -v or --verbose.
/// let verbose = Key::switch2("verbose", "v").unwrap();
///
/// // A value-taking key with a single (long) name.
/// let output = Key::option("output").unwrap();
///
/// // Two names of the same length-class won't fly.
/// assert!(Key::switch2("verbose", "noisy").is_err());
/// assert!(Key::switch2("v", "n").is_err());
/// ```
pub struct Key {
	/// # Primary Name.
	name: String,

	/// # Secondary Name, If Any.
	alias: Option<String>,

	/// # Requires a Value?
	value: bool,
}

impl Key {
	/// # New Switch.
	///
	/// Declare a boolean key — present or not, no value attached.
	///
	/// ## Errors
	///
	/// This will return an error if the name is empty.
	pub fn switch(name: &str) -> Result<Self, TartanError> {
		Ok(Self {
			name: one_name(name)?,
			alias: None,
			value: false,
		})
	}

	/// # New Switch (Paired).
	///
	/// Declare a boolean key with two names, one short and one long, in
	/// either order.
	///
	/// ## Errors
	///
	/// This will return an error if either name is empty, or if both names
	/// belong to the same length-class (both short or both long).
	pub fn switch2(name1: &str, name2: &str) -> Result<Self, TartanError> {
		let (name, alias) = two_names(name1, name2)?;
		Ok(Self { name, alias: Some(alias), value: false })
	}

	/// # New Option.
	///
	/// Declare a key that requires a value.
	///
	/// ## Errors
	///
	/// This will return an error if the name is empty.
	pub fn option(name: &str) -> Result<Self, TartanError> {
		Ok(Self {
			name: one_name(name)?,
			alias: None,
			value: true,
		})
	}

	/// # New Option (Paired).
	///
	/// Declare a value-requiring key with two names, one short and one long,
	/// in either order.
	///
	/// ## Errors
	///
	/// This will return an error if either name is empty, or if both names
	/// belong to the same length-class (both short or both long).
	pub fn option2(name1: &str, name2: &str) -> Result<Self, TartanError> {
		let (name, alias) = two_names(name1, name2)?;
		Ok(Self { name, alias: Some(alias), value: true })
	}
}

impl Key {
	#[must_use]
	/// # Primary Name.
	pub fn name(&self) -> &str { &self.name }

	#[must_use]
	/// # Secondary Name, If Any.
	pub fn alias(&self) -> Option<&str> { self.alias.as_deref() }

	#[must_use]
	/// # Requires a Value?
	pub const fn takes_value(&self) -> bool { self.value }

	#[must_use]
	/// # Canonical Name.
	///
	/// The name a resolved value gets recorded under: the long name when the
	/// key has one, otherwise its only name. This gives callers one stable
	/// lookup key per option regardless of which alias the user typed.
	///
	/// ## Examples
	///
	/// ```
	/// use tartan::Key;
	///
	/// let key = Key::switch2("v", "verbose").unwrap();
	/// assert_eq!(key.canonical(), "verbose");
	///
	/// let key = Key::switch("v").unwrap();
	/// assert_eq!(key.canonical(), "v");
	/// ```
	pub fn canonical(&self) -> &str {
		match self.alias.as_deref() {
			Some(alias) if is_short(&self.name) => alias,
			_ => &self.name,
		}
	}
}



#[derive(Debug, Clone, Default)]
/// # Key Set.
///
/// A lookup table mapping every declared name — primary and alias alike — to
/// its [`Key`]. Both names of a paired key resolve to the same entry.
///
/// Re-inserting a name quietly replaces the earlier claim (last write wins);
/// declaration order is entirely under the caller's control, so there is
/// nothing to warn about.
pub struct KeySet {
	/// # Declared Keys.
	keys: Vec<Key>,

	/// # Name → Key Index.
	table: BTreeMap<String, usize>,
}

impl KeySet {
	#[must_use]
	/// # New (Empty) Instance.
	pub fn new() -> Self { Self::default() }

	/// # Insert a Key.
	///
	/// Register the key under each of its names.
	pub fn insert(&mut self, key: Key) {
		let idx = self.keys.len();
		if let Some(alias) = key.alias() {
			self.table.insert(alias.to_owned(), idx);
		}
		self.table.insert(key.name().to_owned(), idx);
		self.keys.push(key);
	}

	#[must_use]
	/// # Look Up a Name.
	///
	/// Exact, case-sensitive match only.
	pub fn get(&self, name: &str) -> Option<&Key> {
		self.table.get(name).and_then(|&idx| self.keys.get(idx))
	}

	#[must_use]
	/// # Number of Declared Keys.
	pub fn len(&self) -> usize { self.keys.len() }

	#[must_use]
	/// # Is It Empty?
	pub fn is_empty(&self) -> bool { self.keys.is_empty() }
}

impl Extend<Key> for KeySet {
	fn extend<I: IntoIterator<Item=Key>>(&mut self, iter: I) {
		for key in iter { self.insert(key); }
	}
}

impl FromIterator<Key> for KeySet {
	fn from_iter<I: IntoIterator<Item=Key>>(iter: I) -> Self {
		let mut out = Self::default();
		out.extend(iter);
		out
	}
}



/// # Short Name?
///
/// Short means exactly one character.
fn is_short(name: &str) -> bool { name.chars().count() == 1 }

/// # Validate a Lone Name.
fn one_name(name: &str) -> Result<String, TartanError> {
	if name.is_empty() { Err(TartanError::EmptyKey) }
	else { Ok(name.to_owned()) }
}

/// # Validate a Name Pair.
///
/// Exactly one of the two must be short.
fn two_names(name1: &str, name2: &str) -> Result<(String, String), TartanError> {
	if name1.is_empty() || name2.is_empty() { Err(TartanError::EmptyKey) }
	else {
		match (is_short(name1), is_short(name2)) {
			(true, true) => Err(TartanError::DoubleShort(name1.to_owned(), name2.to_owned())),
			(false, false) => Err(TartanError::DoubleLong(name1.to_owned(), name2.to_owned())),
			_ => Ok((name1.to_owned(), name2.to_owned())),
		}
	}
}
