//! Data types shared across notecraft crates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::defaults;
use crate::error::{Error, Result};

fn default_language() -> String {
    defaults::OUTPUT_LANGUAGE.to_string()
}

// =============================================================================
// EXTRACTION
// =============================================================================

/// Free-text note description to be turned into structured note fields.
///
/// `current_date` and `current_datetime` are supplied by the caller; the
/// pipeline never consults the server clock, so relative dates ("tomorrow")
/// resolve against whatever "now" the caller states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRequest {
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_language")]
    pub output_language: String,
    #[serde(default)]
    pub current_date: String,
    #[serde(default)]
    pub current_datetime: String,
}

impl ExtractionRequest {
    /// Request with the default output language and no date context.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            output_language: default_language(),
            current_date: String::new(),
            current_datetime: String::new(),
        }
    }

    pub fn with_output_language(mut self, language: impl Into<String>) -> Self {
        self.output_language = language.into();
        self
    }

    /// Set the caller's notion of "now".
    pub fn with_now(mut self, date: impl Into<String>, datetime: impl Into<String>) -> Self {
        self.current_date = date.into();
        self.current_datetime = datetime.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.description.is_empty() {
            return Err(Error::Validation("Description is required".to_string()));
        }
        Ok(())
    }
}

/// Structured note fields extracted from a description.
///
/// `tags` is always a single comma-joined string at this boundary, even when
/// the model answered with a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub title: String,
    pub content: String,
    pub tags: String,
    /// `YYYY-MM-DD`, or null when the description mentions no date.
    pub event_date: Option<String>,
    /// `HH:MM` 24-hour, or null when the description mentions no time.
    pub event_time: Option<String>,
}

// =============================================================================
// TRANSLATION
// =============================================================================

/// An existing note's fields to translate into `target_language`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default = "default_language")]
    pub target_language: String,
}

impl TranslationRequest {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        tags: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            tags: tags.into(),
            target_language: default_language(),
        }
    }

    pub fn with_target_language(mut self, language: impl Into<String>) -> Self {
        self.target_language = language.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty() && self.content.is_empty() && self.tags.is_empty() {
            return Err(Error::Validation("Nothing to translate".to_string()));
        }
        Ok(())
    }
}

/// Translated note fields. Any field the model omitted carries the input value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub title: String,
    pub content: String,
    pub tags: String,
}

// =============================================================================
// MODEL PROMPT
// =============================================================================

/// A single chat-style model invocation. Built per call, never reused.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelPrompt {
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub model: String,
}

impl ModelPrompt {
    pub fn new(
        system: impl Into<String>,
        user: impl Into<String>,
        temperature: f32,
        model: impl Into<String>,
    ) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            temperature,
            model: model.into(),
        }
    }

    /// Reject parameters the completion endpoint would refuse.
    pub fn validate(&self) -> Result<()> {
        if !(defaults::MIN_TEMPERATURE..=defaults::MAX_TEMPERATURE).contains(&self.temperature) {
            return Err(Error::Validation(format!(
                "temperature {} is outside [{}, {}]",
                self.temperature,
                defaults::MIN_TEMPERATURE,
                defaults::MAX_TEMPERATURE
            )));
        }
        if self.model.trim().is_empty() {
            return Err(Error::Validation("model identifier is empty".to_string()));
        }
        Ok(())
    }
}

// =============================================================================
// NOTES
// =============================================================================

/// A persisted note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub tags: String,
    pub event_date: Option<String>,
    pub event_time: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request for creating a new note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default)]
    pub event_time: Option<String>,
}

impl From<ExtractionResult> for CreateNoteRequest {
    fn from(result: ExtractionResult) -> Self {
        Self {
            title: result.title,
            content: result.content,
            tags: result.tags,
            event_date: result.event_date,
            event_time: result.event_time,
        }
    }
}

/// Partial note update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<String>,
    pub event_date: Option<String>,
    pub event_time: Option<String>,
}

impl UpdateNoteRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.tags.is_none()
            && self.event_date.is_none()
            && self.event_time.is_none()
    }
}
