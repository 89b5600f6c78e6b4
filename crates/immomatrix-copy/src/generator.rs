//! Text generation capability.

use async_trait::async_trait;

use crate::error::DraftError;

/// A service that turns a prompt into generated text.
///
/// `Ok(None)` means the service answered but produced no text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for the prompt.
    async fn generate(&self, prompt: &str) -> Result<Option<String>, DraftError>;

    /// Model identifier sent with every request.
    fn model(&self) -> &str;
}
