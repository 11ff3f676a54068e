use std::error::Error as StdError;

use thiserror::Error;

use crate::error_shaping::domain::model::{
    enums::status_code::StatusCode, value_objects::error_cause::ErrorCause,
};

/// Error raised by business logic, or rebuilt from another service's answer.
///
/// `http_status` is the exact status to answer with. It equals the status
/// code unless the description was rebuilt from a status outside the closed
/// set, e.g. 422 or 503.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("{message} ({status_code})")]
pub struct ErrorDescription {
    param: String,
    cause: Option<ErrorCause>,
    message: String,
    status_code: StatusCode,
    http_status: u16,
}

impl ErrorDescription {
    pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            param: String::new(),
            cause: None,
            message: message.into(),
            status_code,
            http_status: status_code.as_u16(),
        }
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = param.into();
        self
    }

    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.cause = Some(ErrorCause::new(cause));
        self
    }

    pub fn with_cause_text(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(ErrorCause::from_text(cause));
        self
    }

    pub fn with_http_status(mut self, http_status: u16) -> Self {
        self.http_status = http_status;
        self
    }

    pub fn param(&self) -> &str {
        &self.param
    }

    pub fn cause(&self) -> Option<&ErrorCause> {
        self.cause.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    pub fn http_status(&self) -> u16 {
        self.http_status
    }
}
