use std::fmt;

use axum::http::StatusCode as HttpStatusCode;

/// Closed set of statuses a service is allowed to answer with.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum StatusCode {
    Processing,
    NoContent,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    AlreadyExist,
    UnexpectedError,
    NotImplemented,
}

impl StatusCode {
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Processing => 102,
            StatusCode::NoContent => 204,
            StatusCode::BadRequest => 400,
            StatusCode::Unauthorized => 401,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::AlreadyExist => 409,
            StatusCode::UnexpectedError => 500,
            StatusCode::NotImplemented => 501,
        }
    }

    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            102 => Some(StatusCode::Processing),
            204 => Some(StatusCode::NoContent),
            400 => Some(StatusCode::BadRequest),
            401 => Some(StatusCode::Unauthorized),
            403 => Some(StatusCode::Forbidden),
            404 => Some(StatusCode::NotFound),
            409 => Some(StatusCode::AlreadyExist),
            500 => Some(StatusCode::UnexpectedError),
            501 => Some(StatusCode::NotImplemented),
            _ => None,
        }
    }

    /// Maps an arbitrary failing HTTP status onto the closed set.
    ///
    /// Statuses outside the enumeration collapse to their class:
    /// unknown 4xx become `BadRequest`, anything else `UnexpectedError`.
    pub fn from_failed_http_status(value: u16) -> Self {
        Self::from_u16(value).unwrap_or(if (400..500).contains(&value) {
            StatusCode::BadRequest
        } else {
            StatusCode::UnexpectedError
        })
    }

    pub fn is_error(&self) -> bool {
        self.as_u16() >= 400
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}

impl From<StatusCode> for HttpStatusCode {
    fn from(value: StatusCode) -> Self {
        HttpStatusCode::from_u16(value.as_u16()).unwrap_or(HttpStatusCode::INTERNAL_SERVER_ERROR)
    }
}
