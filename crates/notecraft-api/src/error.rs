//! HTTP error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

use notecraft_core::Error;

/// Error returned by every handler. Renders as `{"error": "<message>"}`.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    /// A pipeline call failed downstream of validation.
    Failed {
        operation: &'static str,
        source: Error,
    },
    Internal(Error),
}

impl ApiError {
    /// Missing or unparseable request body.
    pub fn no_data() -> Self {
        ApiError::BadRequest("No data provided".to_string())
    }

    /// Classify an error raised by the extraction or translation pipeline.
    ///
    /// Validation failures keep their bare message; everything else is
    /// reported as `"<operation> failed: <detail>"`.
    pub fn pipeline(operation: &'static str, err: Error) -> Self {
        match err {
            Error::Validation(msg) => ApiError::BadRequest(msg),
            source => ApiError::Failed { operation, source },
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match &err {
            Error::Validation(msg) => ApiError::BadRequest(msg.clone()),
            Error::NoteNotFound(_) => ApiError::NotFound(err.to_string()),
            _ => ApiError::Internal(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Failed { operation, source } => {
                warn!(
                    subsystem = "api",
                    op = operation,
                    error = %source,
                    "Pipeline request failed"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("{} failed: {}", operation, source),
                )
            }
            ApiError::Internal(err) => {
                error!(subsystem = "api", error = %err, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
