//! Errors raised along the build → send → extract pipeline.

use thiserror::Error;

/// Coarse classification of a [`TranslateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or unusable local configuration.
    Configuration,
    /// The request payload could not be encoded.
    Serialization,
    /// The request could not be built, sent, or was answered with a non-200 status.
    Transport,
    /// The response envelope or the message content is malformed JSON.
    Deserialization,
    /// The response is well-formed but does not carry what the schema promised.
    ContractViolation,
}

/// Fatal errors of a single translation exchange.
///
/// Underlying causes are exposed through `source()`, not repeated in the message.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("{env_var} environment variable is not set")]
    MissingApiKey { env_var: String },

    #[error("Failed to serialize request payload")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to build request for {url}")]
    BuildRequest {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to make the request to {url}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request failed with status code: {status} {body}")]
    Status { status: u16, body: String },

    #[error("Failed to read response body")]
    ReadBody(#[source] reqwest::Error),

    #[error("Failed to parse response envelope")]
    Envelope(#[source] serde_json::Error),

    #[error("No choices found in response")]
    NoChoices,

    #[error("First choice carries no message content")]
    MissingContent,

    #[error("Failed to parse message content as JSON")]
    Content(#[source] serde_json::Error),

    #[error("Failed to get '{0}' from message content")]
    MissingField(&'static str),
}

impl TranslateError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingApiKey { .. } => ErrorKind::Configuration,
            Self::Serialize(_) => ErrorKind::Serialization,
            Self::BuildRequest { .. }
            | Self::Network { .. }
            | Self::Status { .. }
            | Self::ReadBody(_) => ErrorKind::Transport,
            Self::Envelope(_) | Self::Content(_) => ErrorKind::Deserialization,
            Self::NoChoices | Self::MissingContent | Self::MissingField(_) => {
                ErrorKind::ContractViolation
            }
        }
    }

    /// Process exit code for this error (sysexits values).
    pub const fn exit_code(&self) -> exitcode::ExitCode {
        match self.kind() {
            ErrorKind::Configuration => exitcode::CONFIG,
            ErrorKind::Serialization => exitcode::SOFTWARE,
            ErrorKind::Transport => exitcode::UNAVAILABLE,
            ErrorKind::Deserialization => exitcode::DATAERR,
            ErrorKind::ContractViolation => exitcode::PROTOCOL,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_includes_code_and_body() {
        let err = TranslateError::Status {
            status: 429,
            body: r#"{"error":"rate limited"}"#.to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("429"));
        assert!(msg.contains(r#"{"error":"rate limited"}"#));
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_missing_api_key_is_configuration_error() {
        let err = TranslateError::MissingApiKey {
            env_var: "OPENAI_API_KEY".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(err.exit_code(), exitcode::CONFIG);
        assert_eq!(
            err.to_string(),
            "OPENAI_API_KEY environment variable is not set"
        );
    }

    #[test]
    fn test_parse_failures_are_distinct_kinds() {
        let envelope = TranslateError::Envelope(
            serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        );
        let no_choices = TranslateError::NoChoices;

        assert_eq!(envelope.kind(), ErrorKind::Deserialization);
        assert_eq!(envelope.exit_code(), exitcode::DATAERR);
        assert_eq!(no_choices.kind(), ErrorKind::ContractViolation);
        assert_eq!(no_choices.exit_code(), exitcode::PROTOCOL);
    }
}
