//! # notecraft-inference
//!
//! Language-model client and structured-output pipelines for notecraft.
//!
//! This crate provides:
//! - OpenAI-compatible chat-completions backend
//! - Response normalization (fence stripping)
//! - A generic structured-completion routine
//! - Note extraction from free-text descriptions
//! - Note translation with per-field fallback
//!
//! # Feature Flags
//!
//! - `mock`: Expose [`mock::MockGenerationBackend`] to downstream tests
//!
//! # Example
//!
//! ```rust,no_run
//! use notecraft_core::ExtractionRequest;
//! use notecraft_inference::{extract_note, OpenAIBackend};
//!
//! #[tokio::main]
//! async fn main() {
//!     let backend = OpenAIBackend::from_env().unwrap();
//!     let req = ExtractionRequest::new("Badminton tmr 5pm @polyu")
//!         .with_now("2024-01-15", "2024-01-15T09:00:00");
//!     let note = extract_note(&backend, &req).await.unwrap();
//!     println!("{} on {:?} at {:?}", note.title, note.event_date, note.event_time);
//! }
//! ```

pub mod extraction;
pub mod few_shot;
pub mod normalize;
pub mod openai;
pub mod structured;
pub mod translation;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use extraction::{extract_note, extraction_system_prompt, map_extraction};
pub use few_shot::{extraction_examples, render_examples, FewShotExample};
pub use normalize::normalize_response;
pub use openai::{OpenAIBackend, OpenAIConfig, UpstreamErrorCode};
pub use structured::{complete_structured, parse_json_object, JsonObject, StructuredTask};
pub use translation::{
    map_translation, translate_note, translation_system_prompt, translation_user_prompt,
};
