use crate::error_shaping::domain::model::{
    entities::error_description::ErrorDescription,
    enums::{service_error::ServiceError, status_code::StatusCode},
    value_objects::{error_envelope::ErrorEnvelope, validation_failure::ValidationFailure},
};

pub trait ErrorShapingService: Send + Sync {
    fn render_validation_failure(&self, failure: &ValidationFailure) -> (StatusCode, ErrorEnvelope);

    fn render_malformed_request(&self, detail: &str) -> (StatusCode, ErrorEnvelope);

    fn render_error_description(
        &self,
        description: &ErrorDescription,
    ) -> (StatusCode, ErrorEnvelope);

    fn reconstruct_error_description(
        &self,
        envelope: &ErrorEnvelope,
        http_status: u16,
    ) -> Option<ErrorDescription>;

    fn render(&self, error: &ServiceError) -> (StatusCode, ErrorEnvelope) {
        match error {
            ServiceError::Validation(failure) => self.render_validation_failure(failure),
            ServiceError::MalformedRequest(detail) => self.render_malformed_request(detail),
            ServiceError::Domain(description) | ServiceError::Remote(description) => {
                self.render_error_description(description)
            }
        }
    }
}
