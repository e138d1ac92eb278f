//! Response side of the chat-completions contract.
//!
//! The reply is JSON inside JSON: the envelope is parsed first, then the
//! first choice's `content` string is parsed again as the schema object.
//! Each step fails with its own [`TranslateError`] variant.

use serde::Deserialize;
use std::collections::HashMap;

use super::error::TranslateError;
use super::payload::{ORIGINAL_FIELD, Role, TRANSLATED_FIELD};

/// Token accounting reported by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    pub role: Role,
    #[serde(default)]
    pub content: Option<String>,
}

/// One candidate completion.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub finish_reason: Option<String>,
    pub message: ResponseMessage,
}

/// Top-level chat-completions response. Fields this program never reads
/// (content filter results, logprobs, ...) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub created: Option<u64>,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub system_fingerprint: Option<String>,
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl ResponseEnvelope {
    pub fn parse(body: &[u8]) -> Result<Self, TranslateError> {
        serde_json::from_slice(body).map_err(TranslateError::Envelope)
    }

    /// Content of the first choice. Never indexes into an empty list.
    pub fn first_content(&self) -> Result<&str, TranslateError> {
        let choice = self.choices.first().ok_or(TranslateError::NoChoices)?;
        choice
            .message
            .content
            .as_deref()
            .ok_or(TranslateError::MissingContent)
    }
}

/// The string-keyed object the model produced inside `content`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TranslationResult {
    fields: HashMap<String, String>,
}

impl TranslationResult {
    pub fn parse(content: &str) -> Result<Self, TranslateError> {
        serde_json::from_str(content).map_err(TranslateError::Content)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn original(&self) -> Option<&str> {
        self.get(ORIGINAL_FIELD)
    }

    /// Value of a field the schema marks as required.
    pub fn require(&self, field: &'static str) -> Result<&str, TranslateError> {
        self.get(field).ok_or(TranslateError::MissingField(field))
    }

    pub fn translated(&self) -> Result<&str, TranslateError> {
        self.require(TRANSLATED_FIELD)
    }
}

/// Everything a caller needs after a successful extraction.
#[derive(Debug, Clone)]
pub struct Extracted {
    pub translated: String,
    pub original: Option<String>,
    pub finish_reason: Option<String>,
    pub model: String,
    pub usage: Option<Usage>,
}

/// Runs both parse steps over a raw response body.
pub fn extract_result(
    body: &[u8],
) -> Result<(ResponseEnvelope, TranslationResult), TranslateError> {
    let envelope = ResponseEnvelope::parse(body)?;
    let result = TranslationResult::parse(envelope.first_content()?)?;
    Ok((envelope, result))
}

/// Parses a raw response body and returns the translation.
pub fn extract_translation(body: &[u8]) -> Result<Extracted, TranslateError> {
    let (envelope, result) = extract_result(body)?;
    let finish_reason = envelope
        .choices
        .first()
        .and_then(|choice| choice.finish_reason.clone());

    Ok(Extracted {
        translated: result.translated()?.to_string(),
        original: result.original().map(str::to_string),
        finish_reason,
        model: envelope.model,
        usage: envelope.usage,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::translation::ErrorKind;
    use serde_json::json;

    fn envelope_with_content(content: &str) -> Vec<u8> {
        serde_json::to_vec(&json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "created": 1_727_000_000,
            "model": "gpt-4o-2024-08-06",
            "system_fingerprint": "fp_abc",
            "prompt_filter_results": [],
            "choices": [{
                "content_filter_results": {
                    "hate": {"filtered": false, "severity": "safe"}
                },
                "finish_reason": "stop",
                "index": 0,
                "logprobs": null,
                "message": {"role": "assistant", "content": content}
            }],
            "usage": {"prompt_tokens": 80, "completion_tokens": 12, "total_tokens": 92}
        }))
        .unwrap()
    }

    #[test]
    fn test_extracts_translated_field() {
        let body = envelope_with_content(r#"{"Original":"Hello","Translated":"こんにちは"}"#);

        let extracted = extract_translation(&body).unwrap();

        assert_eq!(extracted.translated, "こんにちは");
        assert_eq!(extracted.original.as_deref(), Some("Hello"));
        assert_eq!(extracted.finish_reason.as_deref(), Some("stop"));
        assert_eq!(extracted.model, "gpt-4o-2024-08-06");
        assert_eq!(extracted.usage.unwrap().total_tokens, 92);
    }

    #[test]
    fn test_empty_choices() {
        let body = br#"{"id":"x","model":"m","choices":[]}"#;

        let err = extract_translation(body).unwrap_err();

        assert!(matches!(err, TranslateError::NoChoices));
        assert_eq!(err.to_string(), "No choices found in response");
    }

    #[test]
    fn test_missing_translated_key() {
        let body = envelope_with_content(r#"{"Original":"Hi"}"#);

        let err = extract_translation(&body).unwrap_err();

        assert!(matches!(err, TranslateError::MissingField("Translated")));
        assert_eq!(err.kind(), ErrorKind::ContractViolation);
    }

    #[test]
    fn test_content_is_not_json() {
        let body = envelope_with_content("not json");

        let err = extract_translation(&body).unwrap_err();

        assert!(matches!(err, TranslateError::Content(_)));
        assert_eq!(err.kind(), ErrorKind::Deserialization);
    }

    #[test]
    fn test_malformed_envelope() {
        let err = extract_translation(b"<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, TranslateError::Envelope(_)));
    }

    #[test]
    fn test_null_content() {
        let body = br#"{"choices":[{"index":0,"message":{"role":"assistant","content":null}}]}"#;

        let err = extract_translation(body).unwrap_err();

        assert!(matches!(err, TranslateError::MissingContent));
    }

    #[test]
    fn test_only_first_choice_is_used() {
        let body = serde_json::to_vec(&json!({
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "{\"Translated\":\"一\"}"}},
                {"index": 1, "message": {"role": "assistant", "content": "{\"Translated\":\"二\"}"}}
            ]
        }))
        .unwrap();

        let extracted = extract_translation(&body).unwrap();

        assert_eq!(extracted.translated, "一");
        assert!(extracted.original.is_none());
        assert!(extracted.usage.is_none());
    }

    #[test]
    fn test_require_names_the_missing_field() {
        let body = envelope_with_content(r#"{"originalItem":"Backup"}"#);

        let (_, result) = extract_result(&body).unwrap();

        assert_eq!(result.require("originalItem").unwrap(), "Backup");
        let err = result.require("translatedItem").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to get 'translatedItem' from message content"
        );
    }

    #[test]
    fn test_minimal_envelope_parses() {
        let body = br#"{"choices":[{"message":{"role":"assistant","content":"{}"}}]}"#;

        let envelope = ResponseEnvelope::parse(body).unwrap();

        assert_eq!(envelope.choices[0].index, 0);
        assert!(envelope.choices[0].finish_reason.is_none());
        assert_eq!(envelope.first_content().unwrap(), "{}");
    }
}
