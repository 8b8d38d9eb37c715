//! # `regex-collection`
//!
//! A fixed collection of named, precompiled regular expressions:
//! whitespace, slug sanitizing, URLs, DNS hostnames, spintax tokens,
//! US city/state/postal lines, and Markdown code fences.
//!
//! Every pattern is compiled once per process and shared; the accessors
//! return `&'static` matchers that are safe to use from any thread.
//!
//! See:
//! * [`collection`] for the accessors, [`PatternName`] and the [`PatternRegistry`].
//! * [`support::regex`] for the pattern, compile-option and capture helpers the matchers use.
//!
//! ## Crate Features
//!
//! #### feature: ``std``
//!
//! Enabled by default; turns on the default feature set of the `regex` engine.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing registry construction.
//!
//! ## Usage
//!
//! ```rust
//! use regex_collection::{PatternName, PatternRegistry};
//!
//! // Optional: pay the compile cost up front.
//! regex_collection::init();
//!
//! assert!(regex_collection::dns_hostname().is_match("sub.example.com"));
//! assert!(!regex_collection::dns_hostname().is_match("-bad.com"));
//!
//! let caps = regex_collection::city_state_postal()
//!     .captures("Los Angeles CA 90001-1234")
//!     .unwrap();
//! assert_eq!(caps.groups(), Some(["Los Angeles", "CA", "90001-1234"]));
//!
//! let url = PatternRegistry::global().get(PatternName::Url);
//! let found = url.find("visit http://foo.com/bar now").unwrap();
//! assert_eq!(found.as_str(), "http://foo.com/bar");
//! ```
#![warn(missing_docs, unused)]

pub mod collection;
pub mod errors;
pub mod support;

#[doc(inline)]
pub use collection::*;
#[doc(inline)]
pub use errors::*;
