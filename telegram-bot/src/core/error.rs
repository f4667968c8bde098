//! Error types for the relay core.
//!
//! [`RelayError`] is the top-level error; [`HandlerError`] is used for router handler failures.
//! Completion failures are not errors here; they are classified by
//! [`llm_client::CompletionError`] and turned into user-visible text by the router.

use thiserror::Error;

/// Top-level error for the relay (configuration, transport delivery, handler, IO).
#[derive(Error, Debug)]
pub enum RelayError {
    /// A required secret is absent; fatal at startup.
    #[error("Missing required configuration: {0}")]
    ConfigMissing(String),

    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    /// The transport failed to deliver a message or chat action.
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced by router handlers.
#[derive(Error, Debug)]
pub enum HandlerError {
    /// Free-text handler invoked with an empty or whitespace-only body.
    #[error("No text in message")]
    NoText,
}

/// Result type for core operations; uses [`RelayError`].
pub type Result<T> = std::result::Result<T, RelayError>;
