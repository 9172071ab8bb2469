//! Note CRUD endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use notecraft_core::{CreateNoteRequest, ExtractionRequest, UpdateNoteRequest};
use notecraft_inference::extract_note;

use super::parse_body;
use crate::{ApiError, AppState};

pub async fn list_notes(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let notes = state.notes.list().await?;
    Ok(Json(notes))
}

pub async fn create_note(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<impl IntoResponse, ApiError> {
    let req: CreateNoteRequest = parse_body(body)?;
    let note = state.notes.insert(req).await?;
    info!(subsystem = "api", op = "create_note", note_id = %note.id, "Note created");
    Ok((StatusCode::CREATED, Json(note)))
}

/// `POST /notes/generate`: extract note fields from a description and store them.
pub async fn generate_note(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<impl IntoResponse, ApiError> {
    let req: ExtractionRequest = parse_body(body)?;
    let extracted = extract_note(state.backend.as_ref(), &req)
        .await
        .map_err(|e| ApiError::pipeline("Generation", e))?;

    let note = state.notes.insert(extracted.into()).await?;
    info!(subsystem = "api", op = "generate_note", note_id = %note.id, "Generated note stored");
    Ok((StatusCode::CREATED, Json(note)))
}

pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let note = state.notes.fetch(id).await?;
    Ok(Json(note))
}

pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Option<Json<Value>>,
) -> Result<impl IntoResponse, ApiError> {
    let req: UpdateNoteRequest = parse_body(body)?;
    if req.is_empty() {
        return Err(ApiError::BadRequest("No fields to update".to_string()));
    }
    let note = state.notes.update(id, req).await?;
    Ok(Json(note))
}

pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state.notes.delete(id).await?;
    info!(subsystem = "api", op = "delete_note", note_id = %id, "Note deleted");
    Ok(StatusCode::NO_CONTENT)
}
