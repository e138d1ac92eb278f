//! Checklist rows: an item and its description, translated together.
//!
//! Each row is one chat-completions exchange whose reply must carry the
//! four fields below. The schema and the extractor both read the same
//! constants.

use serde::{Deserialize, Serialize};

use super::error::TranslateError;
use super::payload::{ChatMessage, JsonSchemaFormat, RequestPayload, Role, SamplingParams};
use super::response::extract_result;

pub const ORIGINAL_ITEM_FIELD: &str = "originalItem";
pub const TRANSLATED_ITEM_FIELD: &str = "translatedItem";
pub const ORIGINAL_DESCRIPTION_FIELD: &str = "originalDescription";
pub const TRANSLATED_DESCRIPTION_FIELD: &str = "translatedDescription";

pub const CHECKLIST_SYSTEM_PROMPT: &str = "You are an Azure expert. You are responsible for \
reviewing and translating user-provided Azure migration checklists. You must use terminology \
in line with Azure and Microsoft documentation when translating.";

pub const CHECKLIST_INSTRUCTION_TEMPLATE: &str = "Please translate into {target_language}. \
Please make the {target_language} more natural, even if the original meaning or expressions \
change slightly. Feel free to paraphrase.";

/// One input row: `Item,Description`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChecklistRow {
    pub item: String,
    pub description: String,
}

impl ChecklistRow {
    /// System prompt, the translation instruction, then the item and the description.
    pub fn payload(&self, target_language: &str, params: &SamplingParams) -> RequestPayload {
        RequestPayload::new(
            vec![
                ChatMessage::text(Role::System, CHECKLIST_SYSTEM_PROMPT),
                ChatMessage::text(Role::User, build_instruction(target_language)),
                ChatMessage::text(
                    Role::User,
                    format!("Item (plain declarative style): {}", self.item),
                ),
                ChatMessage::text(
                    Role::User,
                    format!("Description (polite style): {}", self.description),
                ),
            ],
            JsonSchemaFormat::checklist(),
            params,
        )
    }
}

#[allow(clippy::literal_string_with_formatting_args)]
fn build_instruction(target_language: &str) -> String {
    CHECKLIST_INSTRUCTION_TEMPLATE.replace("{target_language}", target_language)
}

impl JsonSchemaFormat {
    pub fn checklist() -> Self {
        Self::object(
            "checklist_translation",
            "Checklist row translation schema",
            &[
                (ORIGINAL_ITEM_FIELD, "The original checklist item."),
                (TRANSLATED_ITEM_FIELD, "The translated checklist item."),
                (ORIGINAL_DESCRIPTION_FIELD, "The original item description."),
                (TRANSLATED_DESCRIPTION_FIELD, "The translated item description."),
            ],
        )
    }
}

/// One output row, written in schema field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistTranslation {
    pub original_item: String,
    pub translated_item: String,
    pub original_description: String,
    pub translated_description: String,
}

impl ChecklistTranslation {
    /// Parses a raw response body. Every schema field must be present.
    pub fn extract(body: &[u8]) -> Result<Self, TranslateError> {
        let (_, result) = extract_result(body)?;
        Ok(Self {
            original_item: result.require(ORIGINAL_ITEM_FIELD)?.to_string(),
            translated_item: result.require(TRANSLATED_ITEM_FIELD)?.to_string(),
            original_description: result.require(ORIGINAL_DESCRIPTION_FIELD)?.to_string(),
            translated_description: result.require(TRANSLATED_DESCRIPTION_FIELD)?.to_string(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::translation::{ContentPart, ErrorKind};
    use serde_json::json;

    fn sample_row() -> ChecklistRow {
        ChecklistRow {
            item: "Enable autogrow".to_string(),
            description: "Make sure autogrow is on for every database.".to_string(),
        }
    }

    fn body_with_content(content: &serde_json::Value) -> Vec<u8> {
        serde_json::to_vec(&json!({
            "model": "gpt-4o",
            "choices": [{
                "index": 0,
                "finish_reason": "stop",
                "message": {"role": "assistant", "content": content.to_string()}
            }]
        }))
        .unwrap()
    }

    #[test]
    fn test_checklist_schema_requires_all_four_fields() {
        let schema = JsonSchemaFormat::checklist();

        assert_eq!(
            schema.required_fields(),
            vec![
                ORIGINAL_ITEM_FIELD,
                TRANSLATED_ITEM_FIELD,
                ORIGINAL_DESCRIPTION_FIELD,
                TRANSLATED_DESCRIPTION_FIELD
            ]
        );
        assert_eq!(schema.schema["additionalProperties"], json!(false));
        assert_eq!(
            schema.schema["properties"][TRANSLATED_DESCRIPTION_FIELD]["type"],
            "string"
        );
        assert!(schema.strict);
    }

    #[test]
    fn test_row_payload_sends_item_and_description_separately() {
        let payload = sample_row().payload("Japanese", &SamplingParams::default());

        let texts: Vec<&str> = payload
            .messages
            .iter()
            .map(|message| {
                let ContentPart::Text { text } = &message.content[0];
                text.as_str()
            })
            .collect();

        assert_eq!(payload.messages.len(), 4);
        assert_eq!(payload.messages[0].role, Role::System);
        assert!(payload.messages[1..].iter().all(|m| m.role == Role::User));
        assert_eq!(texts[0], CHECKLIST_SYSTEM_PROMPT);
        assert!(texts[1].starts_with("Please translate into Japanese."));
        assert!(texts[2].ends_with(": Enable autogrow"));
        assert!(texts[3].ends_with(": Make sure autogrow is on for every database."));
        assert_eq!(payload.json_schema().name, "checklist_translation");
    }

    #[test]
    fn test_extract_reads_all_four_fields() {
        let body = body_with_content(&json!({
            "originalItem": "Enable autogrow",
            "translatedItem": "自動拡張を有効にする",
            "originalDescription": "Make sure autogrow is on.",
            "translatedDescription": "自動拡張が有効であることを確認してください。"
        }));

        let row = ChecklistTranslation::extract(&body).unwrap();

        assert_eq!(row.original_item, "Enable autogrow");
        assert_eq!(row.translated_item, "自動拡張を有効にする");
        assert_eq!(row.original_description, "Make sure autogrow is on.");
        assert_eq!(
            row.translated_description,
            "自動拡張が有効であることを確認してください。"
        );
    }

    #[test]
    fn test_extract_rejects_missing_field() {
        let body = body_with_content(&json!({
            "originalItem": "Enable autogrow",
            "translatedItem": "自動拡張を有効にする",
            "originalDescription": "Make sure autogrow is on."
        }));

        let err = ChecklistTranslation::extract(&body).unwrap_err();

        assert!(matches!(
            err,
            TranslateError::MissingField(TRANSLATED_DESCRIPTION_FIELD)
        ));
        assert_eq!(err.kind(), ErrorKind::ContractViolation);
    }
}
