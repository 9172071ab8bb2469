//! Note extraction: free-text description → structured note fields.

use tracing::info;

use notecraft_core::{
    defaults, ExtractionRequest, ExtractionResult, GenerationBackend, ModelPrompt, Result,
};

use crate::few_shot::{extraction_examples, render_examples};
use crate::structured::{complete_structured, flatten_tags, text_field, JsonObject, StructuredTask};

/// Build the extraction system prompt for `req`.
pub fn extraction_system_prompt(req: &ExtractionRequest) -> String {
    format!(
        "Extract the user's notes into the following structured fields:\n\
         1. Title: A concise title for the notes, fewer than 5 words.\n\
         2. Notes: The notes based on the user's input, written in full sentences.\n\
         3. Tags (a list): At most 3 keywords or tags that categorize the content of the notes.\n\
         4. EventDate: If the description mentions a date (like \"tomorrow\", \"next Monday\", or a specific date), give it in YYYY-MM-DD format. Use null if no date is mentioned.\n\
         5. EventTime: If the description mentions a time (like \"5pm\" or \"14:00\"), give it in 24-hour HH:MM format. Use null if no time is mentioned.\n\
         \n\
         IMPORTANT: Current date and time context:\n\
         - Today is: {current_date}\n\
         - Current datetime: {current_datetime}\n\
         - Use this to resolve relative dates like \"tomorrow\", \"next week\", or \"next Monday\".\n\
         \n\
         Respond with raw JSON only, without ```json fences or any other formatting. \
         Write the Title and Notes in the language: {language}.\n\
         \n\
         {examples}",
        current_date = req.current_date,
        current_datetime = req.current_datetime,
        language = req.output_language,
        examples = render_examples(&extraction_examples()),
    )
}

/// Map a parsed extraction object to the note's result shape.
pub fn map_extraction(fields: &JsonObject) -> ExtractionResult {
    ExtractionResult {
        title: text_field(fields, "Title").unwrap_or_default(),
        content: text_field(fields, "Notes").unwrap_or_default(),
        tags: flatten_tags(fields.get("Tags")),
        event_date: text_field(fields, "EventDate"),
        event_time: text_field(fields, "EventTime"),
    }
}

struct ExtractionTask<'a> {
    request: &'a ExtractionRequest,
}

impl StructuredTask for ExtractionTask<'_> {
    type Output = ExtractionResult;

    fn operation(&self) -> &'static str {
        "generate"
    }

    fn prompt(&self) -> ModelPrompt {
        ModelPrompt::new(
            extraction_system_prompt(self.request),
            self.request.description.as_str(),
            defaults::EXTRACTION_TEMPERATURE,
            defaults::GEN_MODEL,
        )
    }

    fn map(&self, fields: &JsonObject) -> ExtractionResult {
        map_extraction(fields)
    }
}

/// Extract structured note fields from `req.description`.
///
/// An empty description is rejected before the backend is called.
pub async fn extract_note(
    backend: &dyn GenerationBackend,
    req: &ExtractionRequest,
) -> Result<ExtractionResult> {
    req.validate()?;

    let result = complete_structured(backend, &ExtractionTask { request: req }).await?;

    info!(
        subsystem = "inference",
        component = "extraction",
        op = "generate",
        output_language = %req.output_language,
        has_event_date = result.event_date.is_some(),
        has_event_time = result.event_time.is_some(),
        "Note extracted"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockGenerationBackend;
    use crate::structured::parse_json_object;
    use notecraft_core::Error;

    const BADMINTON_RESPONSE: &str = r#"{
        "Title": "Badminton at PolyU",
        "Notes": "Remember to play badminton at 5pm tomorrow at PolyU.",
        "Tags": ["sports", "badminton"],
        "EventDate": "2024-01-16",
        "EventTime": "17:00"
    }"#;

    fn badminton_request() -> ExtractionRequest {
        ExtractionRequest::new("Badminton tmr 5pm @polyu")
            .with_now("2024-01-15", "2024-01-15T09:30:00")
    }

    #[test]
    fn test_system_prompt_names_fields_and_context() {
        let prompt = extraction_system_prompt(&badminton_request().with_output_language("French"));
        for field in ["Title:", "Notes:", "Tags", "EventDate:", "EventTime:"] {
            assert!(prompt.contains(field), "missing {field}");
        }
        assert!(prompt.contains("Today is: 2024-01-15"));
        assert!(prompt.contains("Current datetime: 2024-01-15T09:30:00"));
        assert!(prompt.contains("in the language: French"));
        assert!(prompt.contains("YYYY-MM-DD"));
        assert!(prompt.contains("HH:MM"));
        assert!(prompt.contains("Example 1:"));
        assert!(prompt.contains("Example 3:"));
        assert!(!prompt.contains("Example 4:"));
    }

    #[test]
    fn test_map_extraction_defaults() {
        let fields = parse_json_object("{}").unwrap();
        let result = map_extraction(&fields);
        assert_eq!(result.title, "");
        assert_eq!(result.content, "");
        assert_eq!(result.tags, "");
        assert_eq!(result.event_date, None);
        assert_eq!(result.event_time, None);
    }

    #[test]
    fn test_few_shot_outputs_map_cleanly() {
        for example in extraction_examples() {
            let result = map_extraction(example.output.as_object().unwrap());
            assert!(!result.title.is_empty());
            assert!(!result.tags.is_empty());
        }
    }

    #[tokio::test]
    async fn test_extract_badminton_scenario() {
        let backend = MockGenerationBackend::new().with_response(BADMINTON_RESPONSE);
        let result = extract_note(&backend, &badminton_request()).await.unwrap();

        assert_eq!(result.title, "Badminton at PolyU");
        assert_eq!(result.tags, "sports, badminton");
        assert_eq!(result.event_date.as_deref(), Some("2024-01-16"));
        assert_eq!(result.event_time.as_deref(), Some("17:00"));
    }

    #[tokio::test]
    async fn test_extract_sends_description_and_parameters() {
        let backend = MockGenerationBackend::new().with_response(BADMINTON_RESPONSE);
        extract_note(&backend, &badminton_request()).await.unwrap();

        let calls = backend.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].user, "Badminton tmr 5pm @polyu");
        assert_eq!(calls[0].temperature, defaults::EXTRACTION_TEMPERATURE);
        assert_eq!(calls[0].model, defaults::GEN_MODEL);
        assert!(calls[0].system.contains("Today is: 2024-01-15"));
    }

    #[tokio::test]
    async fn test_extract_empty_description_never_calls_backend() {
        let backend = MockGenerationBackend::new().with_response(BADMINTON_RESPONSE);
        let err = extract_note(&backend, &ExtractionRequest::new(""))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_extract_fenced_response() {
        let fenced = format!("```json\n{}\n```", BADMINTON_RESPONSE);
        let backend = MockGenerationBackend::new().with_response(fenced);
        let result = extract_note(&backend, &badminton_request()).await.unwrap();
        assert_eq!(result.event_date.as_deref(), Some("2024-01-16"));
    }

    #[tokio::test]
    async fn test_extract_null_dates_pass_through() {
        let backend = MockGenerationBackend::new().with_response(
            r#"{"Title": "Buy Groceries", "Notes": "Remember to buy groceries.", "Tags": ["shopping"], "EventDate": null, "EventTime": null}"#,
        );
        let result = extract_note(&backend, &ExtractionRequest::new("Remember to buy groceries"))
            .await
            .unwrap();
        assert_eq!(result.tags, "shopping");
        assert!(result.event_date.is_none());
        assert!(result.event_time.is_none());
    }

    #[tokio::test]
    async fn test_extract_malformed_output_is_parse_error() {
        let backend = MockGenerationBackend::new().with_response("I could not understand that.");
        let err = extract_note(&backend, &badminton_request()).await.unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[tokio::test]
    async fn test_extract_empty_fence_is_parse_error() {
        let backend = MockGenerationBackend::new().with_response("```");
        let err = extract_note(&backend, &badminton_request()).await.unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
