//! Extractors whose rejections use the JSON error envelope instead of axum's
//! plain-text defaults.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use musicdb_core::types::DbId;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Message for an `{id}` segment that cannot name a record.
pub const RESOURCE_NOT_FOUND: &str = "the requested resource could not be found";

/// Record id taken from the `{id}` path segment.
///
/// A segment that is not an integer is answered with 404, the same as an id
/// that does not exist.
#[derive(Debug, Clone, Copy)]
pub struct RecordId(pub DbId);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection, "Rejected record id");
                AppError::NotFound(RESOURCE_NOT_FOUND.into())
            })?;
        Ok(RecordId(id))
    }
}

/// JSON request body. Malformed or mistyped bodies are answered with 400.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(JsonBody(value))
    }
}
