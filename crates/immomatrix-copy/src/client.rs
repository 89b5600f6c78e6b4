//! Draft client: prompt in, displayable text out.

use std::sync::Arc;

use crate::generator::TextGenerator;
use crate::request::CampaignDraftRequest;

/// Shown when the service answers without any text.
pub const FALLBACK_EMPTY: &str = "Konnte keine Texte generieren.";

/// Shown when the request fails for any reason.
pub const FALLBACK_ERROR: &str =
    "Fehler bei der Generierung der Marketing-Texte. Bitte prüfen Sie den API Key.";

/// Result of one draft request before it is flattened to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftOutcome {
    /// The service produced text.
    Generated(String),
    /// The service answered but produced no text.
    Empty,
    /// The request failed; carries the diagnostic message.
    Failed(String),
}

impl DraftOutcome {
    /// Displayable text, substituting the fixed fallbacks.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Generated(text) => text,
            Self::Empty => FALLBACK_EMPTY.to_string(),
            Self::Failed(_) => FALLBACK_ERROR.to_string(),
        }
    }

    /// Whether the request failed.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Sends campaign prompts to a text generator.
#[derive(Clone)]
pub struct DraftClient {
    generator: Arc<dyn TextGenerator>,
}

impl DraftClient {
    /// Wrap a generator.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Model identifier of the underlying generator.
    #[must_use]
    pub fn model(&self) -> &str {
        self.generator.model()
    }

    /// Run one request and classify the result.
    pub async fn draft(&self, request: &CampaignDraftRequest) -> DraftOutcome {
        tracing::info!(
            model = self.generator.model(),
            project_type = %request.project_type,
            location = %request.location,
            "requesting campaign draft"
        );
        let prompt = request.render_prompt();
        match self.generator.generate(&prompt).await {
            Ok(Some(text)) => {
                tracing::debug!(chars = text.chars().count(), "draft received");
                DraftOutcome::Generated(text)
            }
            Ok(None) => {
                tracing::warn!("draft service returned no text");
                DraftOutcome::Empty
            }
            Err(err) => {
                tracing::error!(error = %err, "draft request failed");
                DraftOutcome::Failed(err.to_string())
            }
        }
    }

    /// Run one request and return displayable text. Never fails.
    pub async fn submit(&self, request: &CampaignDraftRequest) -> String {
        self.draft(request).await.into_text()
    }
}

impl std::fmt::Debug for DraftClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraftClient")
            .field("model", &self.generator.model())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DraftError;
    use crate::gemini::GeminiClient;
    use async_trait::async_trait;
    use parking_lot::Mutex;

    struct Scripted {
        reply: Mutex<Option<Result<Option<String>, DraftError>>>,
        seen: Mutex<Vec<String>>,
    }

    impl Scripted {
        fn new(reply: Result<Option<String>, DraftError>) -> Arc<Self> {
            Arc::new(Self {
                reply: Mutex::new(Some(reply)),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl TextGenerator for Scripted {
        async fn generate(&self, prompt: &str) -> Result<Option<String>, DraftError> {
            self.seen.lock().push(prompt.to_string());
            self.reply.lock().take().unwrap_or(Ok(None))
        }

        fn model(&self) -> &str {
            "scripted"
        }
    }

    #[tokio::test]
    async fn generated_text_passes_through() {
        let generator = Scripted::new(Ok(Some("**Wohnen am Puls**".into())));
        let client = DraftClient::new(generator.clone());
        let text = client.submit(&CampaignDraftRequest::default()).await;
        assert_eq!(text, "**Wohnen am Puls**");

        let seen = generator.seen.lock();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].contains("Zürich Oerlikon"));
    }

    #[tokio::test]
    async fn empty_answer_uses_empty_fallback() {
        let client = DraftClient::new(Scripted::new(Ok(None)));
        let outcome = client.draft(&CampaignDraftRequest::default()).await;
        assert_eq!(outcome, DraftOutcome::Empty);
        assert_eq!(outcome.into_text(), FALLBACK_EMPTY);
    }

    #[tokio::test]
    async fn service_error_uses_error_fallback() {
        let client = DraftClient::new(Scripted::new(Err(DraftError::Status {
            status: 500,
            body: "boom".into(),
        })));
        let outcome = client.draft(&CampaignDraftRequest::default()).await;
        assert!(outcome.is_failure());
        assert_eq!(outcome.into_text(), FALLBACK_ERROR);
    }

    #[tokio::test]
    async fn missing_key_uses_error_fallback() {
        let client = DraftClient::new(Arc::new(GeminiClient::new(None)));
        assert_eq!(
            client.submit(&CampaignDraftRequest::default()).await,
            FALLBACK_ERROR
        );
    }

    #[tokio::test]
    async fn unreachable_service_uses_error_fallback() {
        let gemini = GeminiClient::new(Some("key".into())).with_endpoint("http://127.0.0.1:1");
        let client = DraftClient::new(Arc::new(gemini));
        assert_eq!(
            client.submit(&CampaignDraftRequest::default()).await,
            FALLBACK_ERROR
        );
    }

    #[test]
    fn debug_shows_model() {
        let client = DraftClient::new(Scripted::new(Ok(None)));
        assert!(format!("{client:?}").contains("scripted"));
    }
}
