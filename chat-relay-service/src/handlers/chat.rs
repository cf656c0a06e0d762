use crate::dtos::{ChatRequest, ChatResponse};
use crate::startup::AppState;
use crate::utils::ValidatedJson;
use axum::{extract::State, Json};
use service_core::error::AppError;

/// Relay one user message to the upstream model and return its reply.
pub async fn chat(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = payload.message.trim();
    if message.is_empty() {
        tracing::info!("Empty message received");
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Message cannot be empty"
        )));
    }

    tracing::info!(
        message_len = message.chars().count(),
        "Processing chat message"
    );
    tracing::debug!(message = %message, "Chat message content");

    let response = state
        .text_provider
        .generate(message)
        .await
        .map_err(|e| AppError::UpstreamError(e.into()))?;

    tracing::info!(
        response_len = response.chars().count(),
        "AI response received successfully"
    );

    Ok(Json(ChatResponse { response }))
}
