use axum::{
    Json,
    http::StatusCode as HttpStatusCode,
    response::{IntoResponse, Response},
};

use crate::error_shaping::{
    application::services::error_shaping_service_impl::ErrorShapingServiceImpl,
    domain::{
        model::{
            entities::error_description::ErrorDescription,
            enums::service_error::ServiceError,
            value_objects::error_envelope::ErrorEnvelope,
        },
        services::error_shaping_service::ErrorShapingService,
    },
    interfaces::rest::resources::error_envelope_resource::ErrorEnvelopeResource,
};

/// Turns a rendered envelope into an HTTP response with `http_status`.
/// Statuses below 400 never carry a body.
pub fn envelope_response(http_status: u16, envelope: &ErrorEnvelope) -> Response {
    let status =
        HttpStatusCode::from_u16(http_status).unwrap_or(HttpStatusCode::INTERNAL_SERVER_ERROR);

    if http_status < 400 {
        return status.into_response();
    }

    (status, Json(ErrorEnvelopeResource::from(envelope))).into_response()
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status_code, envelope) = ErrorShapingServiceImpl::new().render(&self);

        if status_code.is_error() {
            tracing::debug!(status = %status_code, error = %self, "rendering error response");
        }

        let http_status = match &self {
            ServiceError::Domain(description) | ServiceError::Remote(description) => {
                description.http_status()
            }
            _ => status_code.as_u16(),
        };

        envelope_response(http_status, &envelope)
    }
}

impl IntoResponse for ErrorDescription {
    fn into_response(self) -> Response {
        ServiceError::Domain(self).into_response()
    }
}
