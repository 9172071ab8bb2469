//! Extraction and translation endpoints.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;
use tracing::info;

use notecraft_core::{ExtractionRequest, TranslationRequest};
use notecraft_inference::{extract_note, translate_note};

use super::parse_body;
use crate::{ApiError, AppState};

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "model_backend": state.backend.backend_name(),
    }))
}

/// `POST /generate`: turn a free-text description into structured note fields.
pub async fn generate(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<impl IntoResponse, ApiError> {
    let req: ExtractionRequest = parse_body(body)?;
    let result = extract_note(state.backend.as_ref(), &req)
        .await
        .map_err(|e| ApiError::pipeline("Generation", e))?;

    info!(
        subsystem = "api",
        op = "generate",
        has_event_date = result.event_date.is_some(),
        "Note fields generated"
    );
    Ok(Json(result))
}

/// `POST /translate`: translate a note's title, content and tags.
pub async fn translate(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<impl IntoResponse, ApiError> {
    let req: TranslationRequest = parse_body(body)?;
    let result = translate_note(state.backend.as_ref(), &req)
        .await
        .map_err(|e| ApiError::pipeline("Translation", e))?;

    info!(
        subsystem = "api",
        op = "translate",
        target_language = %req.target_language,
        "Note translated"
    );
    Ok(Json(result))
}
