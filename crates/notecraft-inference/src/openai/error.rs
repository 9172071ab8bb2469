//! Classification of upstream failures from an OpenAI-compatible endpoint.

use notecraft_core::Error;

/// Upstream failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamErrorCode {
    /// Invalid authentication credentials.
    AuthenticationError,
    /// Rate limit exceeded.
    RateLimitExceeded,
    /// Model not found or not available.
    ModelNotFound,
    /// Request too large.
    ContextLengthExceeded,
    /// Server error.
    ServerError,
    /// Unknown error.
    Unknown,
}

impl UpstreamErrorCode {
    /// Determine error code from HTTP status and error kind.
    pub fn from_response(status: u16, error_kind: &str) -> Self {
        match (status, error_kind) {
            (401 | 403, _) => Self::AuthenticationError,
            (429, _) => Self::RateLimitExceeded,
            (404, _) | (_, "model_not_found" | "unknown_model") => Self::ModelNotFound,
            (400, _) if error_kind.contains("context_length") => Self::ContextLengthExceeded,
            (500..=599, _) => Self::ServerError,
            _ => Self::Unknown,
        }
    }

    /// Whether a later attempt could plausibly succeed.
    ///
    /// Only reported in logs; the client never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimitExceeded | Self::ServerError)
    }
}

/// Convert a classified upstream failure into an `Error::Upstream`.
pub fn to_upstream_error(code: UpstreamErrorCode, message: &str) -> Error {
    let detail = match code {
        UpstreamErrorCode::AuthenticationError => format!("Authentication failed: {}", message),
        UpstreamErrorCode::RateLimitExceeded => format!("Rate limit exceeded: {}", message),
        UpstreamErrorCode::ModelNotFound => format!("Model not found: {}", message),
        UpstreamErrorCode::ContextLengthExceeded => format!("Context too long: {}", message),
        UpstreamErrorCode::ServerError => format!("Server error: {}", message),
        UpstreamErrorCode::Unknown => message.to_string(),
    };
    Error::Upstream(detail)
}
