//! # Error Types

/// Errors from regex-collection operations.
#[derive(Debug, thiserror::Error)]
pub enum RegexCollectionError {
    /// A pattern definition failed to compile.
    #[error("failed to compile pattern {name}: {source}")]
    Compile {
        /// The name of the failing pattern.
        name: String,

        /// The underlying engine error.
        #[source]
        source: regex::Error,
    },

    /// No pattern is registered under the requested name.
    #[error("unknown pattern: {0:?}")]
    UnknownPattern(String),
}

/// Result type for regex-collection operations.
pub type RCResult<T> = core::result::Result<T, RegexCollectionError>;
