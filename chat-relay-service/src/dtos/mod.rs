use serde::{Deserialize, Serialize};
use validator::Validate;

pub use service_core::error::ErrorResponse;

/// Longest accepted message, counted in characters before trimming. Mirrors
/// the `length` rule on [`ChatRequest::message`].
pub const MAX_MESSAGE_CHARS: usize = 1000;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(max = 1000))]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}
