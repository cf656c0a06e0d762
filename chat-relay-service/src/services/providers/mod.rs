//! Upstream AI provider abstractions and implementations.
//!
//! The chat handler only sees [`TextProvider`], so the Gemini client can be
//! swapped for the mock in tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    InvalidResponse(String),

    #[error("Content filtered")]
    ContentFiltered,

    #[error("No response from AI")]
    EmptyResponse,
}

/// Trait for single-turn text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a reply for `prompt` and return its text.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
