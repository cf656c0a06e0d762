use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use service_core::error::{AppError, INVALID_REQUEST_MESSAGE};
use validator::Validate;

/// JSON body extractor that runs `validator` rules before the handler sees it.
///
/// Both parse failures and rule violations are rejected with `400`.
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::info!(error = %e, "JSON binding error");
            AppError::BadRequest(anyhow::anyhow!(INVALID_REQUEST_MESSAGE))
        })?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
