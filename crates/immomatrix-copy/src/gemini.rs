//! Google Gemini `generateContent` provider.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::DraftError;
use crate::generator::TextGenerator;

/// Model used for campaign copy.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Public Generative Language API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Gemini REST client.
pub struct GeminiClient {
    api_key: Option<String>,
    model: String,
    endpoint: String,
    http_client: reqwest::Client,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GeminiClient {
    /// Create a client for the default model and endpoint.
    ///
    /// A missing or blank key is accepted here; requests then fail with
    /// `DraftError::MissingApiKey`.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Use a different model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Use a different endpoint (proxy, regional host, test server).
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Whether an API key is configured.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    /// Full URL of the `generateContent` call.
    #[must_use]
    pub fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, DraftError> {
        let api_key = self.api_key.as_deref().ok_or(DraftError::MissingApiKey)?;

        let request = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };

        let response = self
            .http_client
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DraftError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        extract_text(&body)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

/// Concatenate the text parts of the first candidate.
///
/// Returns `None` when there is no candidate or no non-empty text.
fn extract_text(body: &str) -> Result<Option<String>, DraftError> {
    let parsed: GenerateResponse = serde_json::from_str(body)?;
    let text: String = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect()
        })
        .unwrap_or_default();

    Ok(Some(text).filter(|t| !t.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_endpoint_and_model() {
        let client = GeminiClient::new(Some("k".into())).with_endpoint("http://localhost:9/");
        assert_eq!(
            client.url(),
            "http://localhost:9/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert_eq!(client.model(), DEFAULT_MODEL);
    }

    #[test]
    fn blank_key_counts_as_missing() {
        assert!(!GeminiClient::new(Some("  ".into())).has_credentials());
        assert!(!GeminiClient::new(None).has_credentials());
        assert!(GeminiClient::new(Some("abc".into())).has_credentials());
    }

    #[test]
    fn request_body_shape() {
        let request = GenerateRequest {
            contents: [Content {
                parts: [Part { text: "hallo" }],
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hallo");
    }

    #[test]
    fn extract_joins_parts_of_first_candidate() {
        let body = r#"{"candidates":[
            {"content":{"parts":[{"text":"**Headline**"},{"text":" und mehr"}]}},
            {"content":{"parts":[{"text":"ignored"}]}}
        ]}"#;
        assert_eq!(
            extract_text(body).unwrap().as_deref(),
            Some("**Headline** und mehr")
        );
    }

    #[test]
    fn extract_empty_cases() {
        assert_eq!(extract_text("{}").unwrap(), None);
        assert_eq!(extract_text(r#"{"candidates":[]}"#).unwrap(), None);
        assert_eq!(extract_text(r#"{"candidates":[{}]}"#).unwrap(), None);
        assert_eq!(
            extract_text(r#"{"candidates":[{"content":{"parts":[{"text":""}]}}]}"#).unwrap(),
            None
        );
    }

    #[test]
    fn extract_rejects_invalid_json() {
        assert!(matches!(extract_text("<html>"), Err(DraftError::Decode(_))));
    }

    #[tokio::test]
    async fn missing_key_fails_before_network() {
        let client = GeminiClient::new(None).with_endpoint("http://127.0.0.1:1");
        let err = client.generate("prompt").await.unwrap_err();
        assert!(matches!(err, DraftError::MissingApiKey));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_http_error() {
        let client = GeminiClient::new(Some("key".into())).with_endpoint("http://127.0.0.1:1");
        let err = client.generate("prompt").await.unwrap_err();
        assert!(matches!(err, DraftError::Http(_)));
    }
}
