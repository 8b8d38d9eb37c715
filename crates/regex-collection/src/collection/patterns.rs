//! # Collection Patterns
//!
//! The pattern text of every named entry, written for the [`regex`] engine.

use strum::IntoEnumIterator;

use crate::{collection::PatternName, support::regex::ConstRegexPattern};

/// A named pattern and what it is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PatternDefinition {
    /// The lookup name.
    pub name: PatternName,

    /// The pattern text.
    pub pattern: ConstRegexPattern,

    /// A one-line description of what the pattern matches.
    pub summary: &'static str,
}

/// Iterate over every definition in the collection, in [`PatternName`] order.
pub fn definitions() -> impl Iterator<Item = PatternDefinition> {
    PatternName::iter().map(|name| name.definition())
}

/// Any single whitespace character.
pub const SPACES_PATTERN: ConstRegexPattern = ConstRegexPattern::new(r"\s");

/// Any character that is not a lowercase ASCII letter, digit, whitespace, `-` or `_`.
///
/// Replace matches with `""` to strip everything a slug may not contain.
/// The hyphen is escaped: a bare `\s-_` would be read as a range.
pub const ALPHA_NUMERIC_AND_DASH_UNDERSCORE_PATTERN: ConstRegexPattern =
    ConstRegexPattern::new(r"[^a-z0-9\s\-_]");

/// Two or more consecutive `-` / `_` characters, in any mixture.
pub const DOUBLE_OCCURRENCES_OF_DASH_UNDERSCORE_PATTERN: ConstRegexPattern =
    ConstRegexPattern::new(r"([-_]){2,}");

/// A URI split around its last path segment.
///
/// * group 1 - scheme, authority, and path up to the last segment.
/// * group 2 - the last segment, with its leading `/`.
/// * group 3 - everything after it (query, fragment), possibly empty.
pub const URI_LAST_SEGMENT_PATTERN: ConstRegexPattern =
    ConstRegexPattern::new(r"([^:]+://[^?]+)(/[^/?#]+)(.*$)");

/// A URL beginning with `http://`, `https://` or `www.`.
///
/// Extends greedily up to whitespace or a square bracket, then backs off to a word boundary
/// so trailing punctuation is left out.
pub const URL_PATTERN: ConstRegexPattern =
    ConstRegexPattern::new(r"(?:https?://|www\.)[^ \f\n\r\t\v\]\[]+\b");

/// A complete DNS hostname.
///
/// One or more labels of 1 to 63 ASCII alphanumerics (hyphens allowed inside,
/// never at either end), each followed by a `.`, then an alphabetic TLD of at least
/// two letters. The overall 253 byte limit is not checked.
pub const DNS_HOSTNAME_PATTERN: ConstRegexPattern = ConstRegexPattern::new(
    r"^([a-zA-Z0-9]([a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,}$",
);

/// A `{{ RANDOM | option1 | option2 }}` spintax token.
///
/// Group 1 captures the raw option list, `option1 | option2`.
pub const SPINTAX_PATTERN: ConstRegexPattern =
    ConstRegexPattern::new(r"\{\{\s*RANDOM\s*\|\s*(.*?)\s*\}\}");

/// A complete "City ST 12345" or "City ST 12345-6789" line.
///
/// Groups: city, two letter state, postal code.
pub const CITY_STATE_POSTAL_PATTERN: ConstRegexPattern =
    ConstRegexPattern::new(r"^(.*)\s+([A-Za-z]{2})\s+(\d{5}(?:-\d{4})?)$");

/// The opening fence of a Markdown code block, at the start of the input.
///
/// Three backticks, an optional alphabetic language tag, optional trailing whitespace,
/// and an optional line terminator. `^` is not multi-line: later fences
/// (including the closing one) never match.
pub const MARKDOWN_CODE_FENCE_PATTERN: ConstRegexPattern =
    ConstRegexPattern::new(r"^```[a-zA-Z]*\s*\n?");
