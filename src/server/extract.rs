//! Request extractors shared by controllers.

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::server::error::AppError;

/// JSON body extractor that also runs `validator` rules.
///
/// Malformed JSON, a wrong content type and failed validation all reject with
/// `AppError::BadRequest` carrying the detail, so clients always get an `ErrorDto`.
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
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| AppError::BadRequest(errors.to_string()))?;

        Ok(Self(value))
    }
}
