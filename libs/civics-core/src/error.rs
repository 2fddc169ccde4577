//! Error types for civics-core.

use thiserror::Error;

/// Result type alias using CoreError.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised when turning external input into core types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown study mode: {0}")]
    UnknownStudyMode(String),

    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    #[error("question {0} is not in the catalog")]
    UnknownQuestion(u32),
}
