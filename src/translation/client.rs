use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use super::error::TranslateError;
use super::payload::RequestPayload;

/// How the API key is attached to the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthScheme {
    /// `api-key: <key>` (Azure OpenAI).
    #[default]
    ApiKey,
    /// `Authorization: Bearer <key>` (OpenAI and compatible services).
    Bearer,
}

pub struct TranslationClient {
    client: Client,
    endpoint: String,
    api_key: String,
    auth: AuthScheme,
}

impl TranslationClient {
    pub fn new(endpoint: String, api_key: String, auth: AuthScheme) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
            auth,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends `payload` once and returns the raw body of a 200 response.
    pub async fn send(&self, payload: &RequestPayload) -> Result<Vec<u8>, TranslateError> {
        let body = serde_json::to_vec(payload).map_err(TranslateError::Serialize)?;

        let mut http_request = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body);

        http_request = match self.auth {
            AuthScheme::ApiKey => http_request.header("api-key", &self.api_key),
            AuthScheme::Bearer => {
                http_request.header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            }
        };

        let http_request = http_request
            .build()
            .map_err(|source| TranslateError::BuildRequest {
                url: self.endpoint.clone(),
                source,
            })?;

        let response = self
            .client
            .execute(http_request)
            .await
            .map_err(|source| TranslateError::Network {
                url: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|err| format!("<unreadable body: {err}>"));
            return Err(status_error(status, body));
        }

        let bytes = response.bytes().await.map_err(TranslateError::ReadBody)?;
        Ok(bytes.to_vec())
    }
}

/// Anything other than 200 is fatal; the body is kept verbatim and never parsed.
fn status_error(status: StatusCode, body: String) -> TranslateError {
    TranslateError::Status {
        status: status.as_u16(),
        body,
    }
}
