//! Error types for cardbox-core.

use thiserror::Error;

/// Result type alias for cardbox-core operations.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Failures raised when hydrating a flashcard from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Id was missing, zero, or not a positive integer.
    #[error("Id is required")]
    MissingId,

    /// Question was missing or empty.
    #[error("Question is required")]
    MissingQuestion,

    /// Answer was missing or empty.
    #[error("Answer is required")]
    MissingAnswer,

    /// Categories was missing or not an array of strings.
    #[error("Categories must be an array")]
    InvalidCategories,

    /// Difficulty was not an integer within the valid range.
    #[error("Difficulty must be an integer between 1 and 5")]
    InvalidDifficulty,

    /// Timestamp field could not be parsed.
    #[error("invalid timestamp in '{0}'")]
    InvalidTimestamp(String),
}
