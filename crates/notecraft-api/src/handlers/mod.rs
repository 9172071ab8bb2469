//! HTTP handlers for notecraft-api.

pub mod notes;
pub mod pipeline;

use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::ApiError;

/// Decode a JSON request body.
///
/// A missing body, one that is not JSON, or an empty or non-object document
/// are all reported as "No data provided".
pub(crate) fn parse_body<T: DeserializeOwned>(body: Option<Json<Value>>) -> Result<T, ApiError> {
    let Some(Json(value)) = body else {
        return Err(ApiError::no_data());
    };
    match &value {
        Value::Object(map) if !map.is_empty() => {}
        _ => return Err(ApiError::no_data()),
    }
    serde_json::from_value(value)
        .map_err(|e| ApiError::BadRequest(format!("Invalid request body: {}", e)))
}
