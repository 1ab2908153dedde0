/*!
# Tartan: Syntax.
*/

use crate::TartanError;



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Syntax.
///
/// A `Syntax` bundles the handful of knobs that control how raw arguments
/// are classified during a parse: the long/short option prefixes, the inline
/// value separator, the stop trigger, short-option clustering, and whether
/// the first positional argument ends option scanning.
///
/// The default matches the usual Unix conventions (`--key=val`, `-k`, `--`);
/// [`Syntax::windows`] and [`Syntax::powershell`] cover the other common
/// households, and the `with_*` builder methods allow à la carte tweaking.
///
/// Each of the four string fields can be disabled outright by passing `None`
/// to its builder, switching off the corresponding behavior entirely. When
/// enabled, they must be non-empty; a bare token exactly equal to a prefix
/// is never treated as an option.
///
/// ## Examples
///
/// ```
/// use tartan::Syntax;
///
/// // Long options only, git-config style.
/// let syntax = Syntax::default()
///     .with_short_prefix(None).unwrap()
///     .with_stop_trigger(None).unwrap();
/// ```
pub struct Syntax {
	/// # Long Option Prefix.
	long_prefix: Option<String>,

	/// # Inline Value Separator (Long Options Only).
	separator: Option<String>,

	/// # Short Option Prefix.
	short_prefix: Option<String>,

	/// # Stop Trigger.
	stop: Option<String>,

	/// # Allow Short Option Clusters?
	cluster: bool,

	/// # Stop Scanning at the First Positional Argument?
	stop_on_first_arg: bool,
}

impl Default for Syntax {
	#[inline]
	fn default() -> Self {
		Self {
			long_prefix: Some("--".to_owned()),
			separator: Some("=".to_owned()),
			short_prefix: Some("-".to_owned()),
			stop: Some("--".to_owned()),
			cluster: true,
			stop_on_first_arg: false,
		}
	}
}

impl Syntax {
	#[must_use]
	/// # Windows Style.
	///
	/// Slash-prefixed options with colon-separated values — `/out:file` —
	/// and no short options, clustering, or stop trigger.
	pub fn windows() -> Self {
		Self {
			long_prefix: Some("/".to_owned()),
			separator: Some(":".to_owned()),
			short_prefix: None,
			stop: None,
			cluster: false,
			stop_on_first_arg: false,
		}
	}

	#[must_use]
	/// # Powershell Style.
	///
	/// Single-dash long options with no inline values — `-Verbose` — and no
	/// short options, clustering, or stop trigger.
	pub fn powershell() -> Self {
		Self {
			long_prefix: Some("-".to_owned()),
			separator: None,
			short_prefix: None,
			stop: None,
			cluster: false,
			stop_on_first_arg: false,
		}
	}
}

/// # Builders.
impl Syntax {
	/// # With Long Option Prefix.
	///
	/// Pass `None` to disable long option recognition altogether.
	///
	/// ## Errors
	///
	/// This will return an error if the prefix is an empty string.
	pub fn with_long_prefix(mut self, prefix: Option<&str>) -> Result<Self, TartanError> {
		self.long_prefix = enabled(prefix)?;
		Ok(self)
	}

	/// # With Inline Value Separator.
	///
	/// Pass `None` to disable inline values; values must then arrive as the
	/// following argument.
	///
	/// ## Errors
	///
	/// This will return an error if the separator is an empty string.
	pub fn with_separator(mut self, separator: Option<&str>) -> Result<Self, TartanError> {
		self.separator = enabled(separator)?;
		Ok(self)
	}

	/// # With Short Option Prefix.
	///
	/// Pass `None` to disable short option recognition altogether.
	///
	/// ## Errors
	///
	/// This will return an error if the prefix is an empty string.
	pub fn with_short_prefix(mut self, prefix: Option<&str>) -> Result<Self, TartanError> {
		self.short_prefix = enabled(prefix)?;
		Ok(self)
	}

	/// # With Stop Trigger.
	///
	/// The literal token that permanently ends option scanning. Pass `None`
	/// to disable the behavior.
	///
	/// ## Errors
	///
	/// This will return an error if the trigger is an empty string.
	pub fn with_stop_trigger(mut self, stop: Option<&str>) -> Result<Self, TartanError> {
		self.stop = enabled(stop)?;
		Ok(self)
	}

	#[must_use]
	/// # With(out) Short Option Clustering.
	///
	/// When enabled — the default — a short token like `-abc` unpacks into
	/// the options `a`, `b`, and `c` (or an option and its attached value).
	pub const fn with_clustering(mut self, cluster: bool) -> Self {
		self.cluster = cluster;
		self
	}

	#[must_use]
	/// # With(out) Stop-on-First-Argument.
	///
	/// When enabled, the first positional argument permanently ends option
	/// scanning, git-subcommand style. Disabled by default.
	pub const fn with_stop_on_first_arg(mut self, stop: bool) -> Self {
		self.stop_on_first_arg = stop;
		self
	}
}

/// # Getters.
impl Syntax {
	#[must_use]
	/// # Long Option Prefix, If Enabled.
	pub fn long_prefix(&self) -> Option<&str> { self.long_prefix.as_deref() }

	#[must_use]
	/// # Inline Value Separator, If Enabled.
	pub fn separator(&self) -> Option<&str> { self.separator.as_deref() }

	#[must_use]
	/// # Short Option Prefix, If Enabled.
	pub fn short_prefix(&self) -> Option<&str> { self.short_prefix.as_deref() }

	#[must_use]
	/// # Stop Trigger, If Enabled.
	pub fn stop_trigger(&self) -> Option<&str> { self.stop.as_deref() }

	#[must_use]
	/// # Short Option Clustering?
	pub const fn clustering(&self) -> bool { self.cluster }

	#[must_use]
	/// # Stop on First Positional Argument?
	pub const fn stop_on_first_arg(&self) -> bool { self.stop_on_first_arg }
}

/// # Classification.
impl Syntax {
	/// # Stop Trigger?
	pub(crate) fn is_stop(&self, arg: &str) -> bool {
		self.stop.as_deref() == Some(arg)
	}

	/// # Long Option Remainder.
	///
	/// If the argument classifies as a long option, return the portion after
	/// the prefix, otherwise `None`. A token exactly equal to the prefix
	/// does not count.
	pub(crate) fn long_tail<'a>(&self, arg: &'a str) -> Option<&'a str> {
		let tail = arg.strip_prefix(self.long_prefix.as_deref()?)?;
		if tail.is_empty() { None }
		else { Some(tail) }
	}

	/// # Short Option Remainder.
	///
	/// Same as [`Syntax::long_tail`] for the short prefix, except that long
	/// classification takes priority when the prefixes overlap (as `--`/`-`
	/// do by default).
	pub(crate) fn short_tail<'a>(&self, arg: &'a str) -> Option<&'a str> {
		if self.long_tail(arg).is_some() { return None; }
		let tail = arg.strip_prefix(self.short_prefix.as_deref()?)?;
		if tail.is_empty() { None }
		else { Some(tail) }
	}

	/// # Plain (Non-Option) Argument?
	///
	/// True if the token is neither kind of option nor the stop trigger;
	/// only such tokens are eligible to serve as a lookahead value.
	pub(crate) fn is_plain(&self, arg: &str) -> bool {
		! self.is_stop(arg) &&
		self.long_tail(arg).is_none() &&
		self.short_tail(arg).is_none()
	}
}



/// # Validate an Optional Syntax Token.
///
/// `None` disables; non-empty enables; empty is an error.
fn enabled(token: Option<&str>) -> Result<Option<String>, TartanError> {
	match token {
		Some("") => Err(TartanError::EmptySyntax),
		Some(s) => Ok(Some(s.to_owned())),
		None => Ok(None),
	}
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_syntax_build() {
		let syntax = Syntax::default();
		assert_eq!(syntax.long_prefix(), Some("--"));
		assert_eq!(syntax.separator(), Some("="));
		assert_eq!(syntax.short_prefix(), Some("-"));
		assert_eq!(syntax.stop_trigger(), Some("--"));
		assert!(syntax.clustering());
		assert!(! syntax.stop_on_first_arg());

		// Empty tokens are for disabling, not setting.
		assert!(Syntax::default().with_long_prefix(Some("")).is_err());
		assert!(Syntax::default().with_separator(Some("")).is_err());
		assert!(Syntax::default().with_short_prefix(Some("")).is_err());
		assert!(Syntax::default().with_stop_trigger(Some("")).is_err());

		let syntax = Syntax::default()
			.with_separator(None).expect("Syntax::with_separator failed.")
			.with_stop_trigger(Some(";")).expect("Syntax::with_stop_trigger failed.");
		assert_eq!(syntax.separator(), None);
		assert_eq!(syntax.stop_trigger(), Some(";"));
	}

	#[test]
	fn t_syntax_classify() {
		let syntax = Syntax::default();

		assert_eq!(syntax.long_tail("--verbose"), Some("verbose"));
		assert_eq!(syntax.long_tail("--"), None);
		assert_eq!(syntax.long_tail("-v"), None);
		assert_eq!(syntax.long_tail("verbose"), None);

		assert_eq!(syntax.short_tail("-v"), Some("v"));
		assert_eq!(syntax.short_tail("-"), None);
		assert_eq!(syntax.short_tail("--verbose"), None); // Long wins.
		assert_eq!(syntax.short_tail("v"), None);

		// The overlap case: "--" is the stop trigger, not an option, but it
		// does technically read as a short option if the trigger is off.
		assert!(syntax.is_stop("--"));
		assert_eq!(syntax.short_tail("--"), Some("-"));

		assert!(syntax.is_plain("value"));
		assert!(syntax.is_plain("-")); // A lone dash is a plain argument.
		assert!(syntax.is_plain("")); // So is an empty string.
		assert!(! syntax.is_plain("--"));
		assert!(! syntax.is_plain("-v"));
		assert!(! syntax.is_plain("--verbose"));
	}

	#[test]
	fn t_syntax_presets() {
		let syntax = Syntax::windows();
		assert_eq!(syntax.long_tail("/out"), Some("out"));
		assert_eq!(syntax.long_tail("/"), None);
		assert_eq!(syntax.short_tail("-v"), None);
		assert!(! syntax.is_stop("--"));
		assert!(syntax.is_plain("--")); // No trigger, no dash prefixes.

		let syntax = Syntax::powershell();
		assert_eq!(syntax.long_tail("-Verbose"), Some("Verbose"));
		assert_eq!(syntax.separator(), None);
		assert_eq!(syntax.short_tail("-Verbose"), None); // Long wins; shorts are off anyway.
	}
}
