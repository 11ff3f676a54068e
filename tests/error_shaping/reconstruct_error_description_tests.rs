use microservice_toolkit::error_shaping::domain::{
    model::{
        entities::error_description::ErrorDescription,
        enums::status_code::StatusCode,
        value_objects::{error_envelope::ErrorEnvelope, error_item::ErrorItem},
    },
    services::error_shaping_service::ErrorShapingService,
};

use crate::support::shaping_service;

const GENERIC_MESSAGE: &str = "Something wrong happened on our end. Please try again later.";

#[test]
fn reconstruct_returns_none_below_400() {
    let envelope = ErrorEnvelope::single(ErrorItem::new("name", "detail", "message"));

    for http_status in [200, 201, 204, 302] {
        assert_eq!(
            shaping_service().reconstruct_error_description(&envelope, http_status),
            None
        );
    }
}

#[test]
fn reconstruct_reports_unavailable_service_for_empty_500() {
    let description = shaping_service()
        .reconstruct_error_description(&ErrorEnvelope::empty(), 500)
        .expect("error description");

    assert_eq!(description.status_code(), StatusCode::UnexpectedError);
    assert_eq!(description.message(), GENERIC_MESSAGE);
    assert_eq!(description.param(), "");
    assert_eq!(
        description.cause().map(|cause| cause.text()),
        Some("the service is currently unavailable".to_string())
    );
}

#[test]
fn reconstruct_reports_unexplained_error_for_other_empty_failures() {
    let service = shaping_service();

    let not_found = service
        .reconstruct_error_description(&ErrorEnvelope::empty(), 404)
        .expect("error description");
    assert_eq!(not_found.status_code(), StatusCode::NotFound);
    assert_eq!(not_found.message(), GENERIC_MESSAGE);
    assert_eq!(
        not_found.cause().map(|cause| cause.text()),
        Some("unknown error, the error was not explained by the service".to_string())
    );

    let gateway = service
        .reconstruct_error_description(&ErrorEnvelope::empty(), 503)
        .expect("error description");
    assert_eq!(gateway.status_code(), StatusCode::UnexpectedError);
    assert_eq!(gateway.http_status(), 503);
    assert_eq!(
        gateway.cause().map(|cause| cause.text()),
        Some("unknown error, the error was not explained by the service".to_string())
    );
}

#[test]
fn reconstruct_keeps_only_the_first_item() {
    let envelope = ErrorEnvelope::from(vec![
        ErrorItem::new("email", "Field validation for email failed on the required tag.", "This field is required"),
        ErrorItem::new("name", "Field validation for name failed on the min tag.", "name need to be at least 3 characters long."),
    ]);

    let description = shaping_service()
        .reconstruct_error_description(&envelope, 400)
        .expect("error description");

    assert_eq!(
        description,
        ErrorDescription::new(StatusCode::BadRequest, "This field is required")
            .with_param("email")
            .with_cause_text("Field validation for email failed on the required tag.")
    );
}

#[test]
fn reconstruct_collapses_unknown_client_errors_to_bad_request() {
    let envelope = ErrorEnvelope::single(ErrorItem::new("", "unprocessable", "Try again"));

    let description = shaping_service()
        .reconstruct_error_description(&envelope, 422)
        .expect("error description");

    assert_eq!(description.status_code(), StatusCode::BadRequest);
    assert_eq!(description.http_status(), 422);
    assert_eq!(description.message(), "Try again");
}

#[test]
fn rendered_descriptions_reconstruct_to_themselves() {
    let service = shaping_service();
    let status_codes = [
        StatusCode::BadRequest,
        StatusCode::Unauthorized,
        StatusCode::Forbidden,
        StatusCode::NotFound,
        StatusCode::AlreadyExist,
        StatusCode::UnexpectedError,
        StatusCode::NotImplemented,
    ];

    for status_code in status_codes {
        let description = ErrorDescription::new(status_code, "Order cannot be placed")
            .with_param("order_id")
            .with_cause_text("stock reservation expired");

        let (status, envelope) = service.render_error_description(&description);
        let reconstructed = service
            .reconstruct_error_description(&envelope, status.as_u16())
            .expect("error description");

        assert_eq!(reconstructed, description);
    }
}
