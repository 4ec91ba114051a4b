use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::utils::errors::AppError;

/// JSON extractor that runs `validator` rules after deserialization.
///
/// Every failure mode (unreadable body, wrong field types, missing
/// fields, failed field rules) collapses to the same client-facing
/// message; the underlying cause is logged instead of leaked.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::warn!(rejection = %rejection.body_text(), "rejected request body");
                AppError::bad_request("欄位未填寫正確")
            })?;

        value.validate().map_err(|errors| {
            tracing::warn!(%errors, "rejected request body");
            AppError::bad_request("欄位未填寫正確")
        })?;

        Ok(ValidatedJson(value))
    }
}
