//! # Regex Compile Options

use regex::{Regex, RegexBuilder};

/// Engine limits applied when compiling a pattern.
///
/// Unset limits fall back to the engine defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RegexCompileOptions {
    /// Approximate heap limit (bytes) for the compiled program.
    pub size_limit: Option<usize>,

    /// Approximate heap limit (bytes) for the lazy DFA cache.
    pub dfa_size_limit: Option<usize>,
}

impl RegexCompileOptions {
    /// Create options with every limit left at the engine default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the compiled program size limit.
    pub fn with_size_limit(
        self,
        limit: usize,
    ) -> Self {
        Self {
            size_limit: Some(limit),
            ..self
        }
    }

    /// Set the lazy DFA cache size limit.
    pub fn with_dfa_size_limit(
        self,
        limit: usize,
    ) -> Self {
        Self {
            dfa_size_limit: Some(limit),
            ..self
        }
    }

    pub(crate) fn build(
        &self,
        pattern: &str,
    ) -> Result<Regex, regex::Error> {
        let mut builder = RegexBuilder::new(pattern);
        if let Some(limit) = self.size_limit {
            builder.size_limit(limit);
        }
        if let Some(limit) = self.dfa_size_limit {
            builder.dfa_size_limit(limit);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let options = RegexCompileOptions::new();
        assert_eq!(options, RegexCompileOptions::default());
        assert_eq!(options.size_limit, None);

        let options = options.with_size_limit(1 << 20).with_dfa_size_limit(1 << 16);

        assert_eq!(options.size_limit, Some(1 << 20));
        assert_eq!(options.dfa_size_limit, Some(1 << 16));
    }

    #[test]
    fn test_build() {
        let re = RegexCompileOptions::new().build(r"\d+").unwrap();
        assert!(re.is_match("abc 123"));

        let err = RegexCompileOptions::new()
            .with_size_limit(16)
            .build(r"\w{100}")
            .unwrap_err();
        assert!(matches!(err, regex::Error::CompiledTooBig(_)));
    }
}
