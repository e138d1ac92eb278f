//! Target language codes accepted on the command line.

use anyhow::Result;

/// Supported language codes (ISO 639-1) and the names embedded in the prompt.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("ar", "Arabic"),
    ("de", "German"),
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("hi", "Hindi"),
    ("id", "Indonesian"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("nl", "Dutch"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("sv", "Swedish"),
    ("th", "Thai"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese (Simplified)"),
    ("zh-TW", "Chinese (Traditional)"),
];

pub const DEFAULT_LANGUAGE: &str = "ja";

/// Returns the display name for a supported language code.
///
/// # Errors
///
/// Returns an error if the language code is not in the supported list.
pub fn language_name(code: &str) -> Result<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(supported, _)| *supported == code)
        .map(|(_, name)| *name)
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Invalid language code: '{code}'\n\n\
                 Valid language codes (ISO 639-1): {}",
                SUPPORTED_LANGUAGES
                    .iter()
                    .map(|(code, _)| *code)
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_name_valid() {
        assert_eq!(language_name("ja").ok(), Some("Japanese"));
        assert_eq!(language_name("en").ok(), Some("English"));
        assert_eq!(language_name("zh-TW").ok(), Some("Chinese (Traditional)"));
    }

    #[test]
    fn test_language_name_invalid() {
        assert!(language_name("invalid").is_err());
        assert!(language_name("").is_err());
        assert!(language_name("JA").is_err()); // Case sensitive
    }

    #[test]
    fn test_default_language_is_supported() {
        assert!(language_name(DEFAULT_LANGUAGE).is_ok());
    }
}
