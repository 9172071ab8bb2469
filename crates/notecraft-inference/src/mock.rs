//! Mock generation backend for deterministic testing.
//!
//! Returns scripted responses (or scripted failures) and records every
//! prompt it receives.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use notecraft_core::ExtractionRequest;
//! use notecraft_inference::{extract_note, mock::MockGenerationBackend};
//!
//! #[tokio::main]
//! async fn main() {
//!     let backend = MockGenerationBackend::new().with_response(
//!         r#"{"Title": "Badminton at PolyU", "Notes": "Play badminton.",
//!             "Tags": ["sports", "badminton"], "EventDate": "2024-01-16", "EventTime": "17:00"}"#,
//!     );
//!
//!     let req = ExtractionRequest::new("Badminton tmr 5pm @polyu")
//!         .with_now("2024-01-15", "2024-01-15T09:00:00");
//!     let note = extract_note(&backend, &req).await.unwrap();
//!     assert_eq!(note.tags, "sports, badminton");
//!     assert_eq!(backend.call_count(), 1);
//! }
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use notecraft_core::{Error, GenerationBackend, ModelPrompt, Result};

/// Scripted outcome of a single call.
#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Config(String),
    Upstream(String),
}

impl MockReply {
    fn into_result(self) -> Result<String> {
        match self {
            MockReply::Text(text) => Ok(text),
            MockReply::Config(msg) => Err(Error::Config(msg)),
            MockReply::Upstream(msg) => Err(Error::Upstream(msg)),
        }
    }
}

#[derive(Debug, Default)]
struct MockState {
    queued: VecDeque<MockReply>,
    default: Option<MockReply>,
    calls: Vec<ModelPrompt>,
}

/// Mock generation backend for testing.
#[derive(Clone, Default)]
pub struct MockGenerationBackend {
    state: Arc<Mutex<MockState>>,
}

impl MockGenerationBackend {
    /// Create a mock that answers `"{}"` until told otherwise.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Answer every call with `response`.
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.state().default = Some(MockReply::Text(response.into()));
        self
    }

    /// Queue a one-shot response, consumed before the default.
    pub fn with_queued_response(self, response: impl Into<String>) -> Self {
        self.state().queued.push_back(MockReply::Text(response.into()));
        self
    }

    /// Fail every call with `Error::Upstream(message)`.
    pub fn with_upstream_error(self, message: impl Into<String>) -> Self {
        self.state().default = Some(MockReply::Upstream(message.into()));
        self
    }

    /// Fail every call with `Error::Config(message)`.
    pub fn with_config_error(self, message: impl Into<String>) -> Self {
        self.state().default = Some(MockReply::Config(message.into()));
        self
    }

    /// Every prompt received so far, in order.
    pub fn calls(&self) -> Vec<ModelPrompt> {
        self.state().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state().calls.len()
    }
}

#[async_trait]
impl GenerationBackend for MockGenerationBackend {
    async fn complete(&self, prompt: &ModelPrompt) -> Result<String> {
        let reply = {
            let mut state = self.state();
            state.calls.push(prompt.clone());
            state
                .queued
                .pop_front()
                .or_else(|| state.default.clone())
                .unwrap_or_else(|| MockReply::Text("{}".to_string()))
        };
        reply.into_result()
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}
