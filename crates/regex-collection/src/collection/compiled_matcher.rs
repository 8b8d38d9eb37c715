//! # Compiled Matcher

use std::borrow::Cow;

use regex::{Match, Matches, NoExpand, Regex};

use crate::{
    collection::{PatternDefinition, PatternName},
    errors::{RCResult, RegexCollectionError},
    support::regex::{PatternCaptures, RegexCompileOptions},
};

/// A compiled pattern from the collection.
///
/// Holds the search regex and a twin anchored to the whole haystack,
/// so both "find in" and "is exactly" questions can be answered.
#[derive(Debug, Clone)]
pub struct CompiledMatcher {
    name: PatternName,
    search: Regex,
    full: Regex,
}

fn compile_error(
    name: PatternName,
    source: regex::Error,
) -> RegexCollectionError {
    RegexCollectionError::Compile {
        name: name.to_string(),
        source,
    }
}

impl CompiledMatcher {
    /// Compile the named pattern.
    ///
    /// ## Arguments
    /// * `name` - The pattern to compile.
    /// * `options` - Engine limits to apply.
    pub fn compile(
        name: PatternName,
        options: &RegexCompileOptions,
    ) -> RCResult<Self> {
        let pattern = name.pattern();

        let search = pattern
            .compile_with(options)
            .map_err(|err| compile_error(name, err))?;
        let full = pattern
            .compile_full_match_with(options)
            .map_err(|err| compile_error(name, err))?;

        log::debug!("compiled pattern {name}: {:?}", pattern.as_str());

        Ok(Self { name, search, full })
    }

    /// The pattern's name.
    pub fn name(&self) -> PatternName {
        self.name
    }

    /// The pattern's definition.
    pub fn definition(&self) -> PatternDefinition {
        self.name.definition()
    }

    /// The pattern text.
    pub fn as_str(&self) -> &str {
        self.search.as_str()
    }

    /// The underlying search regex.
    pub fn as_regex(&self) -> &Regex {
        &self.search
    }

    /// The number of capture groups, including group 0.
    pub fn captures_len(&self) -> usize {
        self.search.captures_len()
    }

    /// Does the pattern match anywhere in `haystack`?
    pub fn is_match(
        &self,
        haystack: &str,
    ) -> bool {
        self.search.is_match(haystack)
    }

    /// Does the pattern match the whole of `haystack`?
    ///
    /// This considers every way the pattern could match, not only the leftmost-first one.
    pub fn is_full_match(
        &self,
        haystack: &str,
    ) -> bool {
        self.full.is_match(haystack)
    }

    /// The leftmost-first match in `haystack`.
    pub fn find<'h>(
        &self,
        haystack: &'h str,
    ) -> Option<Match<'h>> {
        self.search.find(haystack)
    }

    /// Iterate over successive non-overlapping matches in `haystack`.
    pub fn find_iter<'r, 'h>(
        &'r self,
        haystack: &'h str,
    ) -> Matches<'r, 'h> {
        self.search.find_iter(haystack)
    }

    /// The capture groups of the leftmost-first match in `haystack`.
    pub fn captures<'h>(
        &self,
        haystack: &'h str,
    ) -> Option<PatternCaptures<'h>> {
        self.search.captures(haystack).map(PatternCaptures::from)
    }

    /// Replace every match in `haystack` with `replacement`.
    ///
    /// The replacement is inserted literally; `$name` group references are not expanded.
    ///
    /// ## Returns
    /// The borrowed `haystack` when nothing matched, otherwise a new string.
    pub fn replace_all<'h>(
        &self,
        haystack: &'h str,
        replacement: &str,
    ) -> Cow<'h, str> {
        self.search.replace_all(haystack, NoExpand(replacement))
    }
}
