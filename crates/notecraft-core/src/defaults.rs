//! Centralized default constants for notecraft.
//!
//! Every crate references these instead of defining its own magic numbers.

// =============================================================================
// INFERENCE
// =============================================================================

/// OpenAI-compatible endpoint serving the hosted models.
pub const MODEL_BASE_URL: &str = "https://models.inference.ai.azure.com";

/// Model used for both extraction and translation.
pub const GEN_MODEL: &str = "gpt-4o-mini";

/// Timeout for a single completion request in seconds.
pub const GEN_TIMEOUT_SECS: u64 = 30;

/// Sampling temperature for note extraction.
pub const EXTRACTION_TEMPERATURE: f32 = 0.7;

/// Sampling temperature for translation. Lower than extraction: fidelity over inference.
pub const TRANSLATION_TEMPERATURE: f32 = 0.3;

/// Inclusive temperature range accepted by the completion endpoint.
pub const MIN_TEMPERATURE: f32 = 0.0;
pub const MAX_TEMPERATURE: f32 = 2.0;

/// Output / target language when the caller names none.
pub const OUTPUT_LANGUAGE: &str = "English";

/// Separator used when flattening a tag list into the stored tag string.
pub const TAG_SEPARATOR: &str = ", ";

// =============================================================================
// SERVER
// =============================================================================

/// Default HTTP bind host.
pub const SERVER_HOST: &str = "0.0.0.0";

/// Default HTTP server port.
pub const SERVER_PORT: u16 = 5001;

/// Default note database (created on first start).
pub const DATABASE_URL: &str = "sqlite://notecraft.db?mode=rwc";

/// Maximum request body size in bytes.
pub const MAX_BODY_SIZE_BYTES: usize = 1024 * 1024;

/// CORS preflight cache lifetime in seconds.
pub const CORS_MAX_AGE_SECS: u64 = 3600;
