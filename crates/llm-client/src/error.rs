//! Classified completion failures.

use thiserror::Error;

/// Outcome of a failed completion call. Recoverable; the caller decides what the user sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    /// The endpoint answered with a status other than 200.
    #[error("API returned status {status}")]
    Api { status: u16 },

    /// The request did not complete within the client timeout.
    #[error("request timed out")]
    Timeout,

    /// Connection failures, malformed bodies, responses without choices.
    #[error("unexpected completion failure: {description}")]
    Unexpected { description: String },
}

impl CompletionError {
    pub fn unexpected(description: impl Into<String>) -> Self {
        CompletionError::Unexpected {
            description: description.into(),
        }
    }
}

impl From<reqwest::Error> for CompletionError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            CompletionError::Timeout
        } else {
            CompletionError::unexpected(e.to_string())
        }
    }
}
