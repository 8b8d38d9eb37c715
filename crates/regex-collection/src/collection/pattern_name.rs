//! # Pattern Names

use crate::{
    collection::{CompiledMatcher, PatternDefinition, PatternRegistry, patterns::*},
    support::regex::ConstRegexPattern,
};

/// The names of the patterns in the collection.
///
/// Parses (ASCII case-insensitively) from either the display name
/// or its snake case alias:
///
/// ```rust
/// use regex_collection::PatternName;
///
/// assert_eq!("DnsHostname".parse::<PatternName>(), Ok(PatternName::DnsHostname));
/// assert_eq!("dns_hostname".parse::<PatternName>(), Ok(PatternName::DnsHostname));
/// assert_eq!(PatternName::DnsHostname.to_string(), "DnsHostname");
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
    strum::Display,
)]
#[strum(ascii_case_insensitive)]
#[non_exhaustive]
pub enum PatternName {
    /// Any single whitespace character.
    #[strum(to_string = "Spaces")]
    Spaces,

    /// Any character outside lowercase ASCII letters, digits, whitespace, `-` and `_`.
    #[strum(
        to_string = "AlphaNumericAndDashUnderscore",
        serialize = "alpha_numeric_and_dash_underscore"
    )]
    AlphaNumericAndDashUnderscore,

    /// Runs of two or more `-` / `_` characters.
    #[strum(
        to_string = "DoubleOccurrencesOfDashUnderscore",
        serialize = "double_occurrences_of_dash_underscore"
    )]
    DoubleOccurrencesOfDashUnderscore,

    /// A URI split around its last path segment.
    #[strum(to_string = "UriLastSegment", serialize = "uri_last_segment")]
    UriLastSegment,

    /// An `http://`, `https://` or `www.` URL embedded in text.
    #[strum(to_string = "Url")]
    Url,

    /// A complete DNS hostname.
    #[strum(to_string = "DnsHostname", serialize = "dns_hostname")]
    DnsHostname,

    /// A `{{ RANDOM | a | b }}` spintax token.
    #[strum(to_string = "Spintax")]
    Spintax,

    /// A complete "City ST 12345" line.
    #[strum(to_string = "CityStatePostal", serialize = "city_state_postal")]
    CityStatePostal,

    /// The opening fence of a Markdown code block.
    #[strum(to_string = "MarkdownCodeFence", serialize = "markdown_code_fence")]
    MarkdownCodeFence,
}

impl PatternName {
    /// Get the pattern text for this name.
    pub const fn pattern(&self) -> ConstRegexPattern {
        use PatternName::*;
        match self {
            Spaces => SPACES_PATTERN,
            AlphaNumericAndDashUnderscore => ALPHA_NUMERIC_AND_DASH_UNDERSCORE_PATTERN,
            DoubleOccurrencesOfDashUnderscore => DOUBLE_OCCURRENCES_OF_DASH_UNDERSCORE_PATTERN,
            UriLastSegment => URI_LAST_SEGMENT_PATTERN,
            Url => URL_PATTERN,
            DnsHostname => DNS_HOSTNAME_PATTERN,
            Spintax => SPINTAX_PATTERN,
            CityStatePostal => CITY_STATE_POSTAL_PATTERN,
            MarkdownCodeFence => MARKDOWN_CODE_FENCE_PATTERN,
        }
    }

    /// Get a one-line description of what the pattern matches.
    pub const fn summary(&self) -> &'static str {
        use PatternName::*;
        match self {
            Spaces => "any single whitespace character",
            AlphaNumericAndDashUnderscore => {
                "any character other than a-z, 0-9, whitespace, '-' or '_'"
            }
            DoubleOccurrencesOfDashUnderscore => "two or more consecutive '-' or '_' characters",
            UriLastSegment => "a URI split into prefix, last path segment, and query/fragment",
            Url => "a URL starting with http://, https:// or www.",
            DnsHostname => "a complete, syntactically valid DNS hostname",
            Spintax => "a {{ RANDOM | a | b }} token, capturing the option list",
            CityStatePostal => "a complete 'City ST 12345[-6789]' line",
            MarkdownCodeFence => "the opening ``` fence of a Markdown code block",
        }
    }

    /// Get the full definition for this name.
    pub const fn definition(&self) -> PatternDefinition {
        PatternDefinition {
            name: *self,
            pattern: self.pattern(),
            summary: self.summary(),
        }
    }

    /// Get the shared compiled matcher for this name.
    ///
    /// See [`PatternRegistry::global`].
    pub fn matcher(&self) -> &'static CompiledMatcher {
        PatternRegistry::global().get(*self)
    }
}
