//! JSON body extractor with JSON error bodies.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use docsystem_core::error::AppError;

use crate::error::ApiError;

/// Like [`Json`], but malformed bodies become `400 VALIDATION_ERROR`.
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;
        Ok(Self(value))
    }
}
