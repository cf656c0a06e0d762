//! HTTP handlers for the chat relay.

pub mod chat;
pub mod health;

use axum::http::Uri;
use service_core::error::AppError;

pub use chat::chat;
pub use health::health_check;

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "No route matched");
    AppError::NotFound(anyhow::anyhow!("Not found"))
}
