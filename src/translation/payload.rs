//! Request side of the chat-completions contract.
//!
//! The payload asks the model for a strict JSON object carrying the source
//! text under [`ORIGINAL_FIELD`] and its translation under
//! [`TRANSLATED_FIELD`]. The same constants are read back by the response
//! extractor, so the schema and the extraction cannot drift apart.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::prompt::{SYSTEM_PROMPT, build_user_prompt};

pub const ORIGINAL_FIELD: &str = "Original";
pub const TRANSLATED_FIELD: &str = "Translated";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One typed segment of a message body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
}

/// One turn of the conversation sent to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: Vec<ContentPart>,
}

impl ChatMessage {
    /// Builds a message with a single text part.
    pub fn text(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            content: vec![ContentPart::Text { text: text.into() }],
        }
    }
}

/// A named JSON schema the model is instructed to conform its reply to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonSchemaFormat {
    pub description: String,
    pub name: String,
    pub schema: Value,
    pub strict: bool,
}

impl JsonSchemaFormat {
    /// Strict object schema with one required string property per `(name, description)` pair.
    pub fn object(name: &str, description: &str, fields: &[(&'static str, &str)]) -> Self {
        let properties: Map<String, Value> = fields
            .iter()
            .map(|(field, about)| {
                (
                    (*field).to_string(),
                    json!({ "type": "string", "description": about }),
                )
            })
            .collect();
        let required: Vec<&str> = fields.iter().map(|(field, _)| *field).collect();

        Self {
            description: description.to_string(),
            name: name.to_string(),
            schema: json!({
                "type": "object",
                "properties": properties,
                "required": required,
                "additionalProperties": false
            }),
            strict: true,
        }
    }

    /// The `{Original, Translated}` object schema, both required, nothing else allowed.
    pub fn translation() -> Self {
        Self::object(
            "translation",
            "Translation schema",
            &[
                (ORIGINAL_FIELD, "The original text to be translated."),
                (TRANSLATED_FIELD, "The translated text."),
            ],
        )
    }

    /// Field names listed under the schema's `required` key.
    pub fn required_fields(&self) -> Vec<&str> {
        self.schema
            .get("required")
            .and_then(Value::as_array)
            .map(|fields| fields.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

/// Serialized as `{"type": "json_schema", "json_schema": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseFormat {
    JsonSchema { json_schema: JsonSchemaFormat },
}

/// Sampling parameters sent with every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    /// In `[0, 2]`.
    pub temperature: f64,
    /// In `[0, 1]`.
    pub top_p: f64,
    pub max_tokens: u32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.95,
            max_tokens: 800,
        }
    }
}

/// The complete body of one chat-completions request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestPayload {
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u32,
    pub response_format: ResponseFormat,
}

impl RequestPayload {
    pub fn new(
        messages: Vec<ChatMessage>,
        json_schema: JsonSchemaFormat,
        params: &SamplingParams,
    ) -> Self {
        Self {
            messages,
            temperature: params.temperature,
            top_p: params.top_p,
            max_tokens: params.max_tokens,
            response_format: ResponseFormat::JsonSchema { json_schema },
        }
    }

    /// Builds the system + user conversation asking for `text` in `target_language`.
    pub fn translation(text: &str, target_language: &str, params: &SamplingParams) -> Self {
        Self::new(
            vec![
                ChatMessage::text(Role::System, SYSTEM_PROMPT),
                ChatMessage::text(Role::User, build_user_prompt(target_language, text)),
            ],
            JsonSchemaFormat::translation(),
            params,
        )
    }

    pub const fn json_schema(&self) -> &JsonSchemaFormat {
        match &self.response_format {
            ResponseFormat::JsonSchema { json_schema } => json_schema,
        }
    }
}
