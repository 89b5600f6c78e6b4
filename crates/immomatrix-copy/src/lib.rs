//! # immomatrix-copy
//!
//! Campaign copy drafting: renders campaign facts into a German prompt,
//! sends it to a generative text service and always returns displayable
//! text, falling back to fixed messages when the service yields nothing
//! or fails.

pub mod client;
pub mod error;
pub mod gemini;
pub mod generator;
pub mod request;
pub mod session;

// Re-exports
pub use client::{DraftClient, DraftOutcome, FALLBACK_EMPTY, FALLBACK_ERROR};
pub use error::DraftError;
pub use gemini::{GeminiClient, DEFAULT_ENDPOINT, DEFAULT_MODEL};
pub use generator::TextGenerator;
pub use request::CampaignDraftRequest;
pub use session::DraftSession;
