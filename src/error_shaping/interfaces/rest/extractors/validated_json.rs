use axum::{
    Json, async_trait,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error_shaping::domain::model::{
    enums::service_error::ServiceError, value_objects::validation_failure::ValidationFailure,
};

/// JSON body that has been decoded and passed its `validator` rules.
///
/// Decoding failures are rejected as `ServiceError::MalformedRequest`,
/// rule violations as `ServiceError::Validation`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(request, state)
            .await
            .map_err(|rejection: JsonRejection| ServiceError::malformed(rejection.body_text()))?;

        if let Err(errors) = value.validate() {
            return Err(match ValidationFailure::try_from(&errors) {
                Ok(failure) => ServiceError::Validation(failure),
                Err(_) => ServiceError::malformed(errors.to_string()),
            });
        }

        Ok(Self(value))
    }
}
