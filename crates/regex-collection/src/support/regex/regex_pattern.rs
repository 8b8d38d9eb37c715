//! # Const Regex Pattern

use regex::Regex;

use crate::support::regex::RegexCompileOptions;

/// A `'static` regex pattern literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstRegexPattern(&'static str);

impl ConstRegexPattern {
    /// Wrap a pattern literal.
    pub const fn new(pattern: &'static str) -> Self {
        Self(pattern)
    }

    /// Get the underlying regex pattern.
    ///
    /// ## Returns
    /// The regex pattern string slice.
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// The pattern, wrapped so it only matches the entire haystack.
    ///
    /// ## Returns
    /// `\A(?:<pattern>)\z`
    pub fn to_full_match(&self) -> String {
        format!(r"\A(?:{})\z", self.0)
    }

    /// Compile the pattern with engine defaults.
    pub fn compile(&self) -> Result<Regex, regex::Error> {
        self.compile_with(&RegexCompileOptions::default())
    }

    /// Compile the pattern with explicit engine limits.
    ///
    /// ## Arguments
    /// * `options` - The engine limits to apply.
    pub fn compile_with(
        &self,
        options: &RegexCompileOptions,
    ) -> Result<Regex, regex::Error> {
        options.build(self.0)
    }

    /// Compile the whole-input twin of the pattern.
    ///
    /// See [`ConstRegexPattern::to_full_match`].
    pub fn compile_full_match_with(
        &self,
        options: &RegexCompileOptions,
    ) -> Result<Regex, regex::Error> {
        options.build(&self.to_full_match())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_const_pattern() {
        const DIGITS: ConstRegexPattern = ConstRegexPattern::new(r"\d{3}");
        assert_eq!(DIGITS.as_str(), r"\d{3}");

        let re = DIGITS.compile().unwrap();
        assert_eq!(re.as_str(), r"\d{3}");
        assert!(re.is_match("abc 123"));
        assert!(!re.is_match("abc 12"));
    }

    #[test]
    fn test_compile_failure() {
        let err = ConstRegexPattern::new(r"(?<=@)\w+").compile().unwrap_err();
        assert!(err.to_string().contains("regex parse error"));

        let err = ConstRegexPattern::new("[").compile().unwrap_err();
        assert!(matches!(err, regex::Error::Syntax(_)));
    }

    #[test]
    fn test_to_full_match() {
        let pattern = ConstRegexPattern::new(r"a|ab");
        assert_eq!(pattern.to_full_match(), r"\A(?:a|ab)\z");

        let re = pattern
            .compile_full_match_with(&RegexCompileOptions::default())
            .unwrap();
        assert!(re.is_match("ab"));
        assert!(re.is_match("a"));
        assert!(!re.is_match("abc"));
        assert!(!re.is_match("xab"));
    }
}
