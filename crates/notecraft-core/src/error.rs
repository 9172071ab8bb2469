//! Error types for notecraft.

use thiserror::Error;

/// Result type alias using notecraft's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for notecraft operations.
///
/// The first four variants are the pipeline taxonomy: every failure of an
/// extraction or translation call is exactly one of them.
#[derive(Error, Debug)]
pub enum Error {
    /// Required credential or configuration value is missing or unusable
    #[error("Configuration error: {0}")]
    Config(String),

    /// Caller input is malformed or incomplete
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The hosted model call failed (network, auth, rate limit, bad upstream payload)
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Model output was not the structured data the task expected
    #[error("Parse error: {0}")]
    Parse(String),

    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Note not found
    #[error("Note not found: {0}")]
    NoteNotFound(uuid::Uuid),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Whether the caller can fix this by changing the request.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::NoteNotFound(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Parse(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Error::Upstream(format!("request timed out: {}", e))
        } else {
            Error::Upstream(e.to_string())
        }
    }
}
