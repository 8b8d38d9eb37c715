//! # Pattern Accessors
//!
//! One zero-argument function per pattern, each returning the shared
//! matcher from [`PatternRegistry::global`](crate::PatternRegistry::global).

use crate::collection::{CompiledMatcher, PatternName};

/// Matches any single whitespace character.
pub fn spaces() -> &'static CompiledMatcher {
    PatternName::Spaces.matcher()
}

/// Matches any character that is not a lowercase ASCII letter, digit, whitespace, `-` or `_`.
///
/// ```rust
/// let slug = regex_collection::alpha_numeric_and_dash_underscore()
///     .replace_all("my Post: part-2!", "");
/// assert_eq!(slug, "my ost part-2");
/// ```
pub fn alpha_numeric_and_dash_underscore() -> &'static CompiledMatcher {
    PatternName::AlphaNumericAndDashUnderscore.matcher()
}

/// Matches runs of two or more `-` / `_` characters.
pub fn double_occurrences_of_dash_underscore() -> &'static CompiledMatcher {
    PatternName::DoubleOccurrencesOfDashUnderscore.matcher()
}

/// Splits a URI into (prefix, last segment, rest).
///
/// ```rust
/// let caps = regex_collection::uri_last_segment()
///     .captures("https://example.com/a/b?x=1")
///     .unwrap();
/// assert_eq!(caps.groups(), Some(["https://example.com/a", "/b", "?x=1"]));
/// ```
pub fn uri_last_segment() -> &'static CompiledMatcher {
    PatternName::UriLastSegment.matcher()
}

/// Matches `http://`, `https://` and `www.` URLs in running text.
pub fn url() -> &'static CompiledMatcher {
    PatternName::Url.matcher()
}

/// Matches a complete DNS hostname.
pub fn dns_hostname() -> &'static CompiledMatcher {
    PatternName::DnsHostname.matcher()
}

/// Matches a `{{ RANDOM | a | b }}` token, capturing the option list.
pub fn spintax() -> &'static CompiledMatcher {
    PatternName::Spintax.matcher()
}

/// Matches a complete "City ST 12345" line, capturing city, state and postal code.
pub fn city_state_postal() -> &'static CompiledMatcher {
    PatternName::CityStatePostal.matcher()
}

/// Matches the opening fence of a Markdown code block at the start of the input.
///
/// ```rust
/// let body = regex_collection::markdown_code_fence()
///     .replace_all("```rust\nfn a() {}\n```\n", "");
/// assert_eq!(body, "fn a() {}\n```\n");
/// ```
pub fn markdown_code_fence() -> &'static CompiledMatcher {
    PatternName::MarkdownCodeFence.matcher()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_map_to_names() {
        let table: [(fn() -> &'static CompiledMatcher, PatternName); 9] = [
            (spaces, PatternName::Spaces),
            (
                alpha_numeric_and_dash_underscore,
                PatternName::AlphaNumericAndDashUnderscore,
            ),
            (
                double_occurrences_of_dash_underscore,
                PatternName::DoubleOccurrencesOfDashUnderscore,
            ),
            (uri_last_segment, PatternName::UriLastSegment),
            (url, PatternName::Url),
            (dns_hostname, PatternName::DnsHostname),
            (spintax, PatternName::Spintax),
            (city_state_postal, PatternName::CityStatePostal),
            (markdown_code_fence, PatternName::MarkdownCodeFence),
        ];

        for (accessor, name) in table {
            assert_eq!(accessor().name(), name);
            assert!(core::ptr::eq(accessor(), accessor()));
        }
    }
}
