//! OpenAI-compatible language-model client.
//!
//! Works with any endpoint that speaks the chat-completions protocol,
//! including GitHub Models, Azure AI inference, and the OpenAI cloud API.
//!
//! # Example
//!
//! ```rust,no_run
//! use notecraft_core::{GenerationBackend, ModelPrompt};
//! use notecraft_inference::openai::{OpenAIBackend, OpenAIConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = OpenAIConfig {
//!         api_key: Some("ghp_...".to_string()),
//!         ..Default::default()
//!     };
//!     let backend = OpenAIBackend::new(config).unwrap();
//!
//!     let prompt = ModelPrompt::new(
//!         "You are a helpful assistant.",
//!         "What is the capital of France?",
//!         1.0,
//!         "gpt-4o-mini",
//!     );
//!     let answer = backend.complete(&prompt).await.unwrap();
//!     println!("{answer}");
//! }
//! ```

mod backend;
mod error;
mod types;

pub use backend::{
    OpenAIBackend, OpenAIConfig, BASE_URL_ENV, FALLBACK_TOKEN_ENV, TIMEOUT_ENV, TOKEN_ENV,
};
pub use error::{to_upstream_error, UpstreamErrorCode};
pub use types::*;
