pub const SYSTEM_PROMPT: &str = "You are an AI assistant that helps people find information.";

pub const DEFAULT_SOURCE_TEXT: &str = "What is the capital of China?";

pub const USER_PROMPT_TEMPLATE: &str = "Translate the following text into {target_language}.\n{text}";

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_user_prompt(target_language: &str, text: &str) -> String {
    // {target_language} and {text} are placeholders for string replacement, not format arguments
    USER_PROMPT_TEMPLATE
        .replace("{target_language}", target_language)
        .replace("{text}", text)
}
