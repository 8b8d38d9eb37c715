//! # Regex Utilities
//!
//! Every pattern in the collection is a plain regular expression for the [`regex`] crate.
//!
//! * [`ConstRegexPattern`] - a `'static` pattern literal, and its whole-input twin.
//! * [`RegexCompileOptions`] - engine limits applied at compile time.
//! * [`PatternCaptures`] - capture groups, with fixed-arity extraction.

mod captures;
mod compile_options;
mod regex_pattern;

#[doc(inline)]
pub use captures::*;
#[doc(inline)]
pub use compile_options::*;
#[doc(inline)]
pub use regex_pattern::*;
