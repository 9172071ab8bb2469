//! Note translation into a target language.

use tracing::info;

use notecraft_core::{
    defaults, GenerationBackend, ModelPrompt, Result, TranslationRequest, TranslationResult,
};

use crate::structured::{complete_structured, text_field, JsonObject, StructuredTask};

/// System prompt declaring the translator role.
pub fn translation_system_prompt(target_language: &str) -> String {
    format!(
        "You are a professional translator. Translate the given text to {target_language}. \
         Return only valid JSON without any markdown formatting or code blocks."
    )
}

/// User prompt embedding the note fields verbatim.
pub fn translation_user_prompt(req: &TranslationRequest) -> String {
    format!(
        "Translate the following note to {language}. Return ONLY a JSON object with the \
         translated fields. Do not add any explanation or markdown formatting.\n\
         \n\
         Title: {title}\n\
         Content: {content}\n\
         Tags: {tags}\n\
         \n\
         Return format:\n\
         {{\"title\": \"translated title\", \"content\": \"translated content\", \"tags\": \"translated tags\"}}",
        language = req.target_language,
        title = req.title,
        content = req.content,
        tags = req.tags,
    )
}

/// Map a parsed translation object, falling back to the input for any
/// missing or null field.
pub fn map_translation(fields: &JsonObject, req: &TranslationRequest) -> TranslationResult {
    TranslationResult {
        title: text_field(fields, "title").unwrap_or_else(|| req.title.clone()),
        content: text_field(fields, "content").unwrap_or_else(|| req.content.clone()),
        tags: text_field(fields, "tags").unwrap_or_else(|| req.tags.clone()),
    }
}

struct TranslationTask<'a> {
    request: &'a TranslationRequest,
}

impl StructuredTask for TranslationTask<'_> {
    type Output = TranslationResult;

    fn operation(&self) -> &'static str {
        "translate"
    }

    fn prompt(&self) -> ModelPrompt {
        ModelPrompt::new(
            translation_system_prompt(&self.request.target_language),
            translation_user_prompt(self.request),
            defaults::TRANSLATION_TEMPERATURE,
            defaults::GEN_MODEL,
        )
    }

    fn map(&self, fields: &JsonObject) -> TranslationResult {
        map_translation(fields, self.request)
    }
}

/// Translate a note's title, content, and tags.
///
/// Rejected before the backend is called if all three fields are empty.
pub async fn translate_note(
    backend: &dyn GenerationBackend,
    req: &TranslationRequest,
) -> Result<TranslationResult> {
    req.validate()?;

    let result = complete_structured(backend, &TranslationTask { request: req }).await?;

    info!(
        subsystem = "inference",
        component = "translation",
        op = "translate",
        target_language = %req.target_language,
        "Note translated"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockGenerationBackend;
    use crate::structured::parse_json_object;
    use notecraft_core::Error;

    #[test]
    fn test_user_prompt_embeds_fields() {
        let req = TranslationRequest::new("Buy Groceries", "Milk and eggs", "shopping")
            .with_target_language("French");
        let prompt = translation_user_prompt(&req);
        assert!(prompt.starts_with("Translate the following note to French."));
        assert!(prompt.contains("Title: Buy Groceries\n"));
        assert!(prompt.contains("Content: Milk and eggs\n"));
        assert!(prompt.contains("Tags: shopping\n"));
        assert!(prompt.contains(r#"{"title": "translated title", "content": "translated content", "tags": "translated tags"}"#));
    }

    #[test]
    fn test_system_prompt_names_language() {
        let prompt = translation_system_prompt("Japanese");
        assert!(prompt.contains("professional translator"));
        assert!(prompt.contains("to Japanese."));
        assert!(prompt.contains("only valid JSON"));
    }

    #[test]
    fn test_map_translation_null_falls_back() {
        let req = TranslationRequest::new("Hello", "World", "greeting");
        let fields = parse_json_object(r#"{"title": "Bonjour", "content": null}"#).unwrap();
        let result = map_translation(&fields, &req);
        assert_eq!(result.title, "Bonjour");
        assert_eq!(result.content, "World");
        assert_eq!(result.tags, "greeting");
    }

    #[tokio::test]
    async fn test_translate_partial_response_falls_back() {
        let backend =
            MockGenerationBackend::new().with_response(r#"{"title":"Acheter des courses"}"#);
        let req = TranslationRequest::new("Buy Groceries", "", "").with_target_language("French");

        let result = translate_note(&backend, &req).await.unwrap();
        assert_eq!(
            result,
            TranslationResult {
                title: "Acheter des courses".to_string(),
                content: String::new(),
                tags: String::new(),
            }
        );
    }

    #[tokio::test]
    async fn test_translate_sends_parameters() {
        let backend = MockGenerationBackend::new()
            .with_response(r#"{"title":"Hola","content":"Mundo","tags":"saludo"}"#);
        let req = TranslationRequest::new("Hello", "World", "greeting").with_target_language("Spanish");
        translate_note(&backend, &req).await.unwrap();

        let calls = backend.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].temperature, defaults::TRANSLATION_TEMPERATURE);
        assert_eq!(calls[0].model, defaults::GEN_MODEL);
        assert!(calls[0].system.contains("to Spanish."));
        assert!(calls[0].user.contains("Title: Hello"));
    }

    #[tokio::test]
    async fn test_translate_all_empty_never_calls_backend() {
        let backend = MockGenerationBackend::new();
        let err = translate_note(&backend, &TranslationRequest::new("", "", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_translate_malformed_output_is_parse_error() {
        let backend = MockGenerationBackend::new().with_response("Voici la traduction : ...");
        let req = TranslationRequest::new("Hello", "", "");
        let err = translate_note(&backend, &req).await.unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[tokio::test]
    async fn test_translate_upstream_failure_propagates() {
        let backend = MockGenerationBackend::new().with_upstream_error("Rate limit exceeded: slow down");
        let req = TranslationRequest::new("Hello", "", "");
        let err = translate_note(&backend, &req).await.unwrap_err();
        assert!(matches!(err, Error::Upstream(_)));
    }
}
