//! Draft client error type.

/// Errors raised while requesting generated copy.
///
/// None of these reach the caller of `DraftClient::submit`; they are
/// logged and replaced by a fallback text.
#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    /// No API key was configured.
    #[error("no API key configured (set API_KEY or GEMINI_API_KEY)")]
    MissingApiKey,

    /// The request could not be sent or the response not read.
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON.
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A draft is already being generated.
    #[error("a draft request is already in flight")]
    InFlight,
}
