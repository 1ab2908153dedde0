/*!
# Tartan

This crate provides a small, configurable CLI option parser called [`Parser`],
for programs that want structured results — named values, ordered positional
arguments, and a complete error list — without pulling in a full framework.

Keys are declared up front via [`Key`], the recognition rules (prefixes,
value separator, stop trigger, clustering) live in a [`Syntax`], and a single
left-to-right pass over the raw arguments produces a [`Results`].

Parsing never panics and never aborts early: every malformed token is
recorded as a [`ParseError`] and the scan keeps going, so callers always get
the most complete picture possible.

## Example

```
use tartan::{Key, Parser, Value};

let parser = Parser::new()
    .with_key(Key::switch2("verbose", "v").unwrap())
    .with_key(Key::option2("output", "o").unwrap());

let results = parser.parse(["-v", "--output=/tmp/report.txt", "input.txt"]);

assert!(! results.has_errors());
assert_eq!(results.get("verbose"), Some(Value::Switch));
assert_eq!(results.get("output"), Some(Value::Text("/tmp/report.txt")));

// Positional arguments can be fetched by 1-indexed position.
assert_eq!(results.get("@1"), Some(Value::Text("input.txt")));
```

Alternate conventions are a [`Syntax`] away:

```
use tartan::{Key, Parser, Syntax, Value};

let parser = Parser::new()
    .with_syntax(Syntax::windows())
    .with_key(Key::option("out").unwrap());

let results = parser.parse(["/out:report.txt"]);
assert_eq!(results.get("out"), Some(Value::Text("report.txt")));
```
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]

mod error;
mod key;
mod parser;
mod results;
mod syntax;

pub use error::TartanError;
pub use key::{
	Key,
	KeySet,
};
pub use parser::Parser;
pub use results::{
	ParseError,
	Results,
	Value,
};
pub use syntax::Syntax;
