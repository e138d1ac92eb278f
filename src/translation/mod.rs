mod checklist;
mod client;
mod error;
mod language;
mod payload;
mod prompt;
mod response;

pub use checklist::{
    CHECKLIST_SYSTEM_PROMPT, ChecklistRow, ChecklistTranslation, ORIGINAL_DESCRIPTION_FIELD,
    ORIGINAL_ITEM_FIELD, TRANSLATED_DESCRIPTION_FIELD, TRANSLATED_ITEM_FIELD,
};
pub use client::{AuthScheme, TranslationClient};
pub use error::{ErrorKind, TranslateError};
pub use language::{DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES, language_name};
pub use payload::{
    ChatMessage, ContentPart, JsonSchemaFormat, ORIGINAL_FIELD, RequestPayload, ResponseFormat,
    Role, SamplingParams, TRANSLATED_FIELD,
};
pub use prompt::{DEFAULT_SOURCE_TEXT, SYSTEM_PROMPT};
pub use response::{
    Choice, Extracted, ResponseEnvelope, ResponseMessage, TranslationResult, Usage,
    extract_result, extract_translation,
};
