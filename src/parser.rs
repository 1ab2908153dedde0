/*!
# Tartan: Parser.
*/

use crate::{
	Key,
	KeySet,
	ParseError,
	Results,
	Syntax,
};



#[derive(Debug, Clone, Default)]
/// # Parser.
///
/// A `Parser` marries a [`Syntax`] to a [`KeySet`] and turns raw argument
/// streams into [`Results`] — resolved keys, ordered positional arguments,
/// and a complete list of anything that went wrong.
///
/// Build it once, then [`parse`](Parser::parse) as many independent streams
/// as you like; each call works from fresh state and the parser itself is
/// never mutated.
///
/// ## Examples
///
/// ```
/// use tartan::{Key, Parser, Value};
///
/// let parser = Parser::new()
///     .with_key(Key::switch2("verbose", "v").unwrap())
///     .with_key(Key::option2("threads", "t").unwrap());
///
/// let results = parser.parse(["-v", "-t8", "in.txt", "--", "-raw"]);
/// assert_eq!(results.get("verbose"), Some(Value::Switch));
/// assert_eq!(results.get("threads"), Some(Value::Text("8")));
/// assert_eq!(results.args(), ["in.txt", "-raw"]);
/// ```
pub struct Parser {
	/// # Recognition Rules.
	syntax: Syntax,

	/// # Declared Keys.
	keys: KeySet,
}

impl Parser {
	#[must_use]
	/// # New Instance.
	///
	/// Default (Unix-style) syntax, no keys.
	pub fn new() -> Self { Self::default() }

	#[must_use]
	/// # With Syntax.
	pub fn with_syntax(mut self, syntax: Syntax) -> Self {
		self.syntax = syntax;
		self
	}

	#[must_use]
	/// # With a Key.
	pub fn with_key(mut self, key: Key) -> Self {
		self.keys.insert(key);
		self
	}

	#[must_use]
	/// # With Keys.
	pub fn with_keys<I: IntoIterator<Item=Key>>(mut self, keys: I) -> Self {
		self.keys.extend(keys);
		self
	}

	#[must_use]
	/// # Recognition Rules.
	pub const fn syntax(&self) -> &Syntax { &self.syntax }

	#[must_use]
	/// # Declared Keys.
	pub const fn keys(&self) -> &KeySet { &self.keys }
}

impl Parser {
	/// # Parse!
	///
	/// Classify each argument in turn — stop trigger, long option, short
	/// option (or cluster), positional — resolving key values inline or via
	/// lookahead as the syntax allows, and return the accumulated
	/// [`Results`].
	///
	/// This never fails; bad input is logged to
	/// [`Results::errors`] and the scan keeps moving.
	pub fn parse<I>(&self, args: I) -> Results
	where I: IntoIterator, I::Item: Into<String> {
		let args: Vec<String> = args.into_iter().map(Into::into).collect();
		let mut results = Results::default();
		let mut scanning = true;
		let mut i = 0;

		while i < args.len() {
			let arg = args[i].as_str();
			let next = args.get(i + 1).map(String::as_str);
			i += 1;

			// The stop trigger kills option scanning for good. It is not
			// itself a positional argument.
			if scanning && self.syntax.is_stop(arg) {
				scanning = false;
				continue;
			}

			if scanning {
				// Long option?
				if let Some(tail) = self.syntax.long_tail(arg) {
					if self.scan_long(tail, next, &mut results) { i += 1; }
					continue;
				}

				// Short option(s)?
				if let Some(tail) = self.syntax.short_tail(arg) {
					if self.scan_short(tail, next, &mut results) { i += 1; }
					continue;
				}
			}

			// Positional argument, by choice or because scanning is off.
			if ! scanning { results.mark_stopped(); }
			results.push_arg(arg.to_owned());
			if scanning && self.syntax.stop_on_first_arg() { scanning = false; }
		}

		results
	}

	#[must_use]
	/// # Parse the Environment.
	///
	/// Shorthand for feeding [`std::env::args`] — minus the program name —
	/// through [`Parser::parse`].
	pub fn parse_env(&self) -> Results {
		self.parse(std::env::args().skip(1))
	}
}

/// # Token Handlers.
impl Parser {
	/// # Handle a Long Option.
	///
	/// `tail` is the argument minus its prefix. Returns `true` if the
	/// lookahead token was consumed as a value (the caller then skips it).
	fn scan_long(&self, tail: &str, next: Option<&str>, results: &mut Results) -> bool {
		// Split name from inline value at the *first* separator, if any.
		let (name, inline) = match self.syntax.separator().and_then(|s| tail.split_once(s)) {
			Some((name, value)) => (name, Some(value)),
			None => (tail, None),
		};

		let Some(key) = self.keys.get(name) else {
			results.push_error(ParseError::InvalidKey(name.to_owned()));
			return false;
		};

		if key.takes_value() {
			if let Some(value) = inline {
				results.push_key(key.canonical(), Some(value.to_owned()));
				false
			}
			// No inline value; borrow the next token if it qualifies.
			else if let Some(value) = next.filter(|n| self.syntax.is_plain(n)) {
				results.push_key(key.canonical(), Some(value.to_owned()));
				true
			}
			else {
				results.push_error(ParseError::MissingValue(name.to_owned()));
				false
			}
		}
		// A value we should not have; the key goes unrecorded.
		else if let Some(value) = inline {
			results.push_error(ParseError::UnexpectedValue(
				name.to_owned(),
				value.to_owned(),
			));
			false
		}
		else {
			results.push_key(key.canonical(), None);
			false
		}
	}

	/// # Handle a Short Option (Cluster).
	///
	/// `cluster` is the argument minus its prefix: one single-character key
	/// name after another when clustering is enabled, otherwise just the
	/// first character. A value-taking key swallows the rest of the cluster
	/// (or the next token) and ends the walk early.
	///
	/// Returns `true` if the lookahead token was consumed as a value.
	fn scan_short(&self, cluster: &str, next: Option<&str>, results: &mut Results) -> bool {
		let take =
			if self.syntax.clustering() { cluster.chars().count() }
			else { 1 };

		let mut buf = [0_u8; 4];
		for (pos, ch) in cluster.char_indices().take(take) {
			let name: &str = ch.encode_utf8(&mut buf);
			let rest = &cluster[pos + ch.len_utf8()..];

			let Some(key) = self.keys.get(name) else {
				results.push_error(ParseError::InvalidKey(name.to_owned()));
				continue;
			};

			if key.takes_value() {
				// The rest of the cluster is the value…
				if ! rest.is_empty() {
					results.push_key(key.canonical(), Some(rest.to_owned()));
				}
				// …or the next token is…
				else if let Some(value) = next.filter(|n| self.syntax.is_plain(n)) {
					results.push_key(key.canonical(), Some(value.to_owned()));
					return true;
				}
				// …or there isn't one.
				else {
					results.push_error(ParseError::MissingValue(name.to_owned()));
				}

				// Value consumption (or the failed attempt) always ends the
				// cluster walk.
				return false;
			}

			results.push_key(key.canonical(), None);

			// Without clustering, leftover characters are dead weight;
			// flag the whole tail as one bad unit.
			if ! self.syntax.clustering() && ! rest.is_empty() {
				results.push_error(ParseError::InvalidKey(rest.to_owned()));
			}
		}

		false
	}
}
