use thiserror::Error;

use crate::error_shaping::domain::model::{
    entities::error_description::ErrorDescription,
    value_objects::validation_failure::ValidationFailure,
};

/// Every failure a handler can hand back to the shaping layer.
#[derive(Clone, Debug, Error)]
pub enum ServiceError {
    #[error("request validation failed on {} field(s)", .0.violations().len())]
    Validation(ValidationFailure),

    #[error("malformed request: {0}")]
    MalformedRequest(String),

    #[error("{0}")]
    Domain(ErrorDescription),

    #[error("remote service failed: {0}")]
    Remote(ErrorDescription),
}

impl ServiceError {
    pub fn malformed(detail: impl Into<String>) -> Self {
        ServiceError::MalformedRequest(detail.into())
    }
}

impl From<ValidationFailure> for ServiceError {
    fn from(value: ValidationFailure) -> Self {
        ServiceError::Validation(value)
    }
}

impl From<ErrorDescription> for ServiceError {
    fn from(value: ErrorDescription) -> Self {
        ServiceError::Domain(value)
    }
}
