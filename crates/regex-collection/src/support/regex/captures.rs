//! # Pattern Captures

use regex::{Captures, Match};

/// The capture groups of one match.
///
/// Thin over [`regex::Captures`]; adds [`PatternCaptures::groups`] for
/// patterns with a fixed set of groups that may not all participate.
#[derive(Debug)]
pub struct PatternCaptures<'h>(Captures<'h>);

impl<'h> From<Captures<'h>> for PatternCaptures<'h> {
    fn from(caps: Captures<'h>) -> Self {
        Self(caps)
    }
}

impl<'h> PatternCaptures<'h> {
    /// Get capture group `index`; group 0 is the whole match.
    ///
    /// ## Returns
    /// `None` if the group did not participate in the match, or does not exist.
    pub fn get(
        &self,
        index: usize,
    ) -> Option<Match<'h>> {
        self.0.get(index)
    }

    /// The number of groups, including group 0.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; group 0 is always present.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over every group, including group 0.
    pub fn iter(&self) -> impl Iterator<Item = Option<Match<'h>>> + '_ {
        self.0.iter()
    }

    /// The text of groups `1..=N`.
    ///
    /// ## Returns
    /// `None` if any of those groups did not participate in the match.
    pub fn groups<const N: usize>(&self) -> Option<[&'h str; N]> {
        let mut out = [""; N];
        for (offset, slot) in out.iter_mut().enumerate() {
            *slot = self.get(offset + 1)?.as_str();
        }
        Some(out)
    }

    /// Unwrap the underlying [`regex::Captures`].
    pub fn into_inner(self) -> Captures<'h> {
        self.0
    }
}
