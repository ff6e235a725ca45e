//! Error types for sheetwrap-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheetwrap-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Range string matches neither the letter nor the numeric grammar
    #[error("Invalid range format '{range}': {reason}")]
    InvalidRangeFormat { range: String, reason: String },

    /// Column letters contain a non A-Z character or overflow a column id
    #[error("Invalid column letters '{0}'")]
    InvalidColumnLetters(String),
}

impl Error {
    /// Create an [`Error::InvalidRangeFormat`] for `range`
    pub fn invalid_range<R: Into<String>, S: Into<String>>(range: R, reason: S) -> Self {
        Error::InvalidRangeFormat {
            range: range.into(),
            reason: reason.into(),
        }
    }
}
