//! Response normalization ahead of structured parsing.
//!
//! Models asked for raw JSON still sometimes wrap it in a fenced code block.
//! This strips exactly one enclosing fence pair and nothing else.

/// Opening marker of a fenced code block.
pub const FENCE: &str = "```";

/// Unwrap a fenced response.
///
/// If `text` starts with a fence marker, the first and last lines are
/// dropped and the interior returned. Anything else is returned unchanged.
/// A fenced response of fewer than three lines has no interior and yields
/// `""`, which JSON parsing then rejects.
///
/// The input is expected to be trimmed already; fences appearing anywhere
/// other than the very start are left alone.
pub fn normalize_response(text: &str) -> &str {
    if !text.starts_with(FENCE) {
        return text;
    }

    let (Some(first), Some(last)) = (text.find('\n'), text.rfind('\n')) else {
        return "";
    };
    if first == last {
        return "";
    }
    &text[first + 1..last]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unfenced_text_unchanged() {
        let text = r#"{"Title": "Buy Groceries"}"#;
        assert_eq!(normalize_response(text), text);
    }

    #[test]
    fn test_plain_fence_stripped() {
        assert_eq!(normalize_response("```\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn test_language_tagged_fence_stripped() {
        let text = "```json\n{\n\"title\": \"Bonjour\"\n}\n```";
        assert_eq!(normalize_response(text), "{\n\"title\": \"Bonjour\"\n}");
    }

    #[test]
    fn test_idempotent_on_normalized_output() {
        let once = normalize_response("```\n{\"a\":1}\n```");
        assert_eq!(normalize_response(once), once);
    }

    #[test]
    fn test_single_line_fence_is_empty() {
        assert_eq!(normalize_response("```"), "");
        assert_eq!(normalize_response("```{\"a\":1}```"), "");
    }

    #[test]
    fn test_two_line_fence_is_empty() {
        assert_eq!(normalize_response("```json\n```"), "");
    }

    #[test]
    fn test_empty_input_unchanged() {
        assert_eq!(normalize_response(""), "");
    }

    #[test]
    fn test_inner_fence_not_scanned() {
        let text = "Here you go:\n```\n{}\n```";
        assert_eq!(normalize_response(text), text);
    }

    #[test]
    fn test_crlf_lines() {
        let out = normalize_response("```json\r\n{\"a\":1}\r\n```");
        assert_eq!(out.trim(), "{\"a\":1}");
    }
}
