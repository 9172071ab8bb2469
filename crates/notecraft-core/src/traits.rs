//! Core traits for notecraft abstractions.
//!
//! These traits define the seams between the pipelines and their external
//! collaborators (the hosted model and note storage), enabling pluggable
//! backends and testability.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::*;

// =============================================================================
// INFERENCE TRAITS
// =============================================================================

/// Backend for chat-style text completion.
///
/// Implementations are stateless across calls and make a single attempt per
/// invocation; retry policy belongs to the caller.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Send the prompt and return the model's raw text completion.
    async fn complete(&self, prompt: &ModelPrompt) -> Result<String>;

    /// Short name for logs and health output.
    fn backend_name(&self) -> &str;
}

// =============================================================================
// NOTE REPOSITORY TRAITS
// =============================================================================

/// Repository for note CRUD operations.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Insert a new note.
    async fn insert(&self, req: CreateNoteRequest) -> Result<Note>;

    /// Fetch a note by ID.
    async fn fetch(&self, id: Uuid) -> Result<Note>;

    /// List all notes, newest first.
    async fn list(&self) -> Result<Vec<Note>>;

    /// Apply a partial update and return the updated note.
    async fn update(&self, id: Uuid, req: UpdateNoteRequest) -> Result<Note>;

    /// Delete a note permanently.
    async fn delete(&self, id: Uuid) -> Result<()>;
}
