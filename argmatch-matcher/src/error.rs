//! Error types for argument matching.

use thiserror::Error;

/// Result type for matcher operations.
pub type MatchResult<T> = Result<T, MatchError>;

/// Errors that can occur while matching arguments.
#[derive(Debug, Error)]
pub enum MatchError {
    /// No registration, synthesis or intrinsic equality applies to the type.
    ///
    /// This means "cannot judge", never "judged unequal".
    #[error("no comparator available for `{type_name}`; register one before matching")]
    NoComparator { type_name: &'static str },

    /// Matcher configuration could not be parsed.
    #[error("invalid matcher configuration: {0}")]
    Config(#[from] serde_json::Error),
}
