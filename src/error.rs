//! Error types for board solving and its collaborators.

use thiserror::Error;

use crate::core::WordError;

/// Errors that can occur while loading, solving or persisting a board.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Board dimensions do not match what the caller expects.
    #[error("malformed board: {0}")]
    MalformedBoard(String),

    /// The answer for the requested date could not be obtained.
    #[error("answer unavailable: {0}")]
    AnswerUnavailable(String),

    /// A word failed validation.
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    /// Guess and answer must have the same number of letters.
    #[error("guess has {guess} letters but answer has {answer}")]
    LengthMismatch {
        /// Letters in the guess.
        guess: usize,
        /// Letters in the answer.
        answer: usize,
    },

    /// A pattern string or row index was rejected.
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to encode or decode JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::AnswerUnavailable(err.to_string())
    }
}

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
