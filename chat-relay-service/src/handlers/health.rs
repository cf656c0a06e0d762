use crate::dtos::HealthResponse;
use axum::{response::IntoResponse, Json};

/// Liveness probe. Never consults the upstream API.
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse::healthy())
}
