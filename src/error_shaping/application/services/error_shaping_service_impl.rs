use crate::error_shaping::domain::{
    model::{
        entities::error_description::ErrorDescription,
        enums::{status_code::StatusCode, validation_rule::ValidationRule},
        value_objects::{
            error_envelope::ErrorEnvelope, error_item::ErrorItem,
            field_violation::FieldViolation, snake_case_field_name::SnakeCaseFieldName,
            validation_failure::ValidationFailure,
        },
    },
    services::error_shaping_service::ErrorShapingService,
};

const GENERIC_FAILURE_MESSAGE: &str = "Something wrong happened on our end. Please try again later.";
const SERVICE_UNAVAILABLE_CAUSE: &str = "the service is currently unavailable";
const UNEXPLAINED_FAILURE_CAUSE: &str = "unknown error, the error was not explained by the service";

#[derive(Clone, Copy, Debug, Default)]
pub struct ErrorShapingServiceImpl;

impl ErrorShapingServiceImpl {
    pub fn new() -> Self {
        Self
    }

    fn violation_to_item(violation: &FieldViolation) -> ErrorItem {
        let param = SnakeCaseFieldName::from_raw(violation.field());
        let detail = format!(
            "Field validation for {} failed on the {} tag.",
            param,
            violation.rule().tag()
        );

        ErrorItem::new(param.into_inner(), detail, Self::violation_message(violation))
    }

    // Unknown tags keep an empty message; clients already cope with it.
    fn violation_message(violation: &FieldViolation) -> String {
        match violation.rule() {
            ValidationRule::Required => "This field is required".to_string(),
            ValidationRule::Email => {
                "Invalid email address. Valid email can contain only letters, numbers, '@' and '.'"
                    .to_string()
            }
            ValidationRule::Url => {
                "Invalid URL address. Valid URL start with http:// or https://".to_string()
            }
            ValidationRule::Min => format!(
                "{} need to be at least {} characters long.",
                violation.field(),
                violation.rule_param()
            ),
            ValidationRule::Max => format!(
                "{} must be less than {} characters long.",
                violation.field(),
                violation.rule_param()
            ),
            ValidationRule::Other(_) => String::new(),
        }
    }
}

impl ErrorShapingService for ErrorShapingServiceImpl {
    fn render_validation_failure(&self, failure: &ValidationFailure) -> (StatusCode, ErrorEnvelope) {
        let envelope: ErrorEnvelope = failure
            .violations()
            .iter()
            .map(Self::violation_to_item)
            .collect();

        (StatusCode::BadRequest, envelope)
    }

    fn render_malformed_request(&self, detail: &str) -> (StatusCode, ErrorEnvelope) {
        (
            StatusCode::BadRequest,
            ErrorEnvelope::single(ErrorItem::new("", detail, "")),
        )
    }

    fn render_error_description(
        &self,
        description: &ErrorDescription,
    ) -> (StatusCode, ErrorEnvelope) {
        let status_code = description.status_code();
        if !status_code.is_error() {
            return (status_code, ErrorEnvelope::empty());
        }

        let detail = description
            .cause()
            .map(|cause| cause.text())
            .unwrap_or_else(|| description.message().to_string());

        (
            status_code,
            ErrorEnvelope::single(ErrorItem::new(
                description.param(),
                detail,
                description.message(),
            )),
        )
    }

    fn reconstruct_error_description(
        &self,
        envelope: &ErrorEnvelope,
        http_status: u16,
    ) -> Option<ErrorDescription> {
        if http_status < 400 {
            return None;
        }

        let status_code = StatusCode::from_failed_http_status(http_status);

        if let Some(item) = envelope.first() {
            return Some(
                ErrorDescription::new(status_code, item.message())
                    .with_param(item.param())
                    .with_cause_text(item.detail())
                    .with_http_status(http_status),
            );
        }

        let cause = if http_status == 500 {
            SERVICE_UNAVAILABLE_CAUSE
        } else {
            UNEXPLAINED_FAILURE_CAUSE
        };

        Some(
            ErrorDescription::new(status_code, GENERIC_FAILURE_MESSAGE)
                .with_cause_text(cause)
                .with_http_status(http_status),
        )
    }
}
