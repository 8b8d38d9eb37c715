//! # Pattern Collection
//!
//! * [`PatternName`] - the closed set of pattern names.
//! * [`patterns`] - the pattern text behind each name, and [`PatternDefinition`].
//! * [`CompiledMatcher`] - a compiled pattern, with search and whole-input tests.
//! * [`PatternRegistry`] - one compiled matcher per name; the global instance
//!   backs the accessor functions ([`spaces`], [`url`], ...).

mod accessors;
mod compiled_matcher;
mod pattern_name;
pub mod patterns;
mod registry;

#[doc(inline)]
pub use accessors::*;
#[doc(inline)]
pub use compiled_matcher::*;
#[doc(inline)]
pub use pattern_name::*;
#[doc(inline)]
pub use patterns::{PatternDefinition, definitions};
#[doc(inline)]
pub use registry::*;
