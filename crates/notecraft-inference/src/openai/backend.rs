//! OpenAI-compatible chat-completions backend.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

use notecraft_core::{defaults, Error, GenerationBackend, ModelPrompt, Result};

use super::error::{to_upstream_error, UpstreamErrorCode};
use super::types::*;

/// Environment variable holding the model-access token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Accepted alternative to [`TOKEN_ENV`] for plain OpenAI deployments.
pub const FALLBACK_TOKEN_ENV: &str = "OPENAI_API_KEY";

/// Environment variable overriding the endpoint base URL.
pub const BASE_URL_ENV: &str = "MODEL_BASE_URL";

/// Environment variable overriding the request timeout in seconds.
pub const TIMEOUT_ENV: &str = "MODEL_TIMEOUT_SECS";

/// Configuration for the OpenAI-compatible backend.
#[derive(Clone)]
pub struct OpenAIConfig {
    /// Base URL for the API endpoint.
    pub base_url: String,
    /// Bearer token. Checked on every call; a missing token fails before any request is sent.
    pub api_key: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
}

impl std::fmt::Debug for OpenAIConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAIConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::MODEL_BASE_URL.to_string(),
            api_key: None,
            timeout_seconds: defaults::GEN_TIMEOUT_SECS,
        }
    }
}

impl OpenAIConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup(TOKEN_ENV)
            .or_else(|| lookup(FALLBACK_TOKEN_ENV))
            .filter(|k| !k.trim().is_empty());

        Self {
            base_url: lookup(BASE_URL_ENV).unwrap_or_else(|| defaults::MODEL_BASE_URL.to_string()),
            api_key,
            timeout_seconds: lookup(TIMEOUT_ENV)
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults::GEN_TIMEOUT_SECS),
        }
    }

    /// Fail with a configuration error if no credential is present.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            Error::Config(format!(
                "{} not found in environment variables. Please add it to your .env file",
                TOKEN_ENV
            ))
        })
    }
}

/// OpenAI-compatible inference backend.
pub struct OpenAIBackend {
    client: Client,
    config: OpenAIConfig,
}

impl OpenAIBackend {
    /// Create a new backend with the given configuration.
    pub fn new(config: OpenAIConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            subsystem = "inference",
            component = "openai",
            base_url = %config.base_url,
            timeout_secs = config.timeout_seconds,
            credential_present = config.api_key.is_some(),
            "Initializing OpenAI-compatible backend"
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(OpenAIConfig::from_env())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &OpenAIConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn map_send_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::Upstream(format!(
                "Request timed out after {}s",
                self.config.timeout_seconds
            ))
        } else {
            Error::Upstream(format!("Request failed: {}", e))
        }
    }
}

#[async_trait]
impl GenerationBackend for OpenAIBackend {
    async fn complete(&self, prompt: &ModelPrompt) -> Result<String> {
        let api_key = self.config.require_api_key()?;
        prompt.validate()?;

        let start = Instant::now();
        debug!(
            subsystem = "inference",
            component = "openai",
            op = "complete",
            model = %prompt.model,
            temperature = prompt.temperature,
            prompt_len = prompt.system.len() + prompt.user.len(),
            "Sending chat completion"
        );

        let request = ChatCompletionRequest {
            model: prompt.model.clone(),
            messages: vec![
                ChatMessage::system(prompt.system.as_str()),
                ChatMessage::user(prompt.user.as_str()),
            ],
            temperature: prompt.temperature,
            max_tokens: None,
            stream: false,
        };

        let response = self
            .client
            .post(self.endpoint("/chat/completions"))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let (kind, message) = match serde_json::from_str::<OpenAIErrorResponse>(&body) {
                Ok(parsed) => (parsed.error.kind().to_string(), parsed.error.message),
                Err(_) if body.trim().is_empty() => ("unknown".to_string(), status.to_string()),
                Err(_) => ("unknown".to_string(), body.trim().to_string()),
            };
            let code = UpstreamErrorCode::from_response(status.as_u16(), &kind);
            warn!(
                subsystem = "inference",
                component = "openai",
                op = "complete",
                status = status.as_u16(),
                retryable = code.is_retryable(),
                duration_ms = start.elapsed().as_millis() as u64,
                error = %message,
                "Chat completion rejected upstream"
            );
            return Err(to_upstream_error(code, &message));
        }

        let result: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| Error::Upstream(format!("Failed to parse response: {}", e)))?;

        let content = result
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| Error::Upstream("response contained no message content".to_string()))?;

        debug!(
            subsystem = "inference",
            component = "openai",
            op = "complete",
            response_len = content.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Chat completion received"
        );
        Ok(content.trim().to_string())
    }

    fn backend_name(&self) -> &str {
        "openai"
    }
}
