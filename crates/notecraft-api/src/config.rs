//! Process configuration read from the environment.

use std::path::PathBuf;

use notecraft_core::{defaults, Error, Result};
use notecraft_inference::OpenAIConfig;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Model client settings, including the required credential.
    pub model: OpenAIConfig,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Directory holding the built web client, served for unmatched paths.
    pub static_dir: Option<PathBuf>,
    /// Allowed CORS origins. Empty or `*` allows any origin.
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// Fails with [`Error::Config`] when no model credential is present, so
    /// the server never starts without one.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let model = OpenAIConfig::from_lookup(&lookup);
        model.require_api_key()?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("Invalid PORT: {:?}", raw)))?,
            None => defaults::SERVER_PORT,
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            model,
            host: lookup("HOST").unwrap_or_else(|| defaults::SERVER_HOST.to_string()),
            port,
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| defaults::DATABASE_URL.to_string()),
            static_dir: lookup("STATIC_DIR")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            cors_allowed_origins,
        })
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_allowed_origins.is_empty() || self.cors_allowed_origins.iter().any(|o| o == "*")
    }
}

/// Logging output settings.
///
/// Read separately from [`AppConfig`] because logging is initialized before
/// the rest of the configuration is validated.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// `"json"` or `"text"`.
    pub format: String,
    /// Optional log file path, rotated daily.
    pub file: Option<String>,
    /// Explicit ANSI color override. Auto-detected when unset.
    pub ansi: Option<bool>,
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            format: lookup("LOG_FORMAT").unwrap_or_else(|| "text".to_string()),
            file: lookup("LOG_FILE").filter(|s| !s.trim().is_empty()),
            ansi: lookup("LOG_ANSI").map(|v| v == "true" || v == "1"),
        }
    }

    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}
