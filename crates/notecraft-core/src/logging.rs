//! Structured logging field name constants for notecraft.
//!
//! All crates use these names so log aggregation can query the same fields
//! across subsystems.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires operator attention |
//! | WARN  | Upstream or parse failure surfaced to a caller |
//! | INFO  | Lifecycle events, pipeline completions |
//! | DEBUG | Prompt/response sizes, config choices |
//!
//! Credentials and full prompt text are never logged.

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "api", "inference", "db"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "openai", "extraction", "translation", "notes"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "complete", "generate", "translate", "insert"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Note UUID being operated on.
pub const NOTE_ID: &str = "note_id";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Byte length of a prompt.
pub const PROMPT_LEN: &str = "prompt_len";

/// Byte length of a model response.
pub const RESPONSE_LEN: &str = "response_len";

// ─── Inference fields ──────────────────────────────────────────────────────

/// Model name used for inference.
pub const MODEL: &str = "model";

/// Whether an upstream failure would be worth retrying (informational only).
pub const RETRYABLE: &str = "retryable";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Boolean success/failure indicator.
pub const SUCCESS: &str = "success";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
