//! Structured completion: prompt → model → normalize → parse → map.
//!
//! Extraction and translation share this routine and differ only in the
//! [`StructuredTask`] they pass in.

use std::time::Instant;

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use notecraft_core::{defaults, Error, GenerationBackend, ModelPrompt, Result};

use crate::normalize::normalize_response;

/// Parsed top-level JSON object from a model response.
pub type JsonObject = Map<String, Value>;

/// A single structured-output task against the model.
pub trait StructuredTask {
    type Output;

    /// Name used in logs.
    fn operation(&self) -> &'static str;

    /// Build the prompt for this call.
    fn prompt(&self) -> ModelPrompt;

    /// Map the parsed object to the task's output shape.
    fn map(&self, fields: &JsonObject) -> Self::Output;
}

/// Run `task` against `backend` and return the mapped output.
///
/// No partial results: any failure along the way is returned as-is.
pub async fn complete_structured<T>(backend: &dyn GenerationBackend, task: &T) -> Result<T::Output>
where
    T: StructuredTask + Sync,
{
    let op = task.operation();
    let prompt = task.prompt();
    let start = Instant::now();

    debug!(
        subsystem = "inference",
        component = "structured",
        op,
        backend = backend.backend_name(),
        model = %prompt.model,
        prompt_len = prompt.system.len() + prompt.user.len(),
        "Running structured completion"
    );

    let raw = backend.complete(&prompt).await?;
    let fields = match parse_json_object(normalize_response(&raw)) {
        Ok(fields) => fields,
        Err(e) => {
            warn!(
                subsystem = "inference",
                component = "structured",
                op,
                response_len = raw.len(),
                error = %e,
                "Model response was not a JSON object"
            );
            return Err(e);
        }
    };

    let output = task.map(&fields);
    info!(
        subsystem = "inference",
        component = "structured",
        op,
        response_len = raw.len(),
        field_count = fields.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        success = true,
        "Structured completion finished"
    );
    Ok(output)
}

/// Parse `text` as a JSON object.
pub fn parse_json_object(text: &str) -> Result<JsonObject> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(fields) => Ok(fields),
        other => Err(Error::Parse(format!(
            "expected a JSON object, got {}",
            value_kind(&other)
        ))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Read `key` as text. Missing and null are `None`; non-string scalars are
/// rendered as JSON.
pub fn text_field(fields: &JsonObject, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Flatten a tag value into the stored tag string.
///
/// Lists are joined with `", "`; a plain string passes through; missing or
/// null becomes empty.
pub fn flatten_tags(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(defaults::TAG_SEPARATOR),
        Some(other) => other.to_string(),
    }
}
