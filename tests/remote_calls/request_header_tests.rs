use axum::http::Method;
use microservice_toolkit::remote_calls::domain::model::{
    enums::remote_call_domain_error::RemoteCallDomainError,
    value_objects::request_header::RequestHeader,
};

#[test]
fn new_normalizes_method_and_defaults_content_type() {
    let header = RequestHeader::new("post", "http://users:8080/users").expect("header");

    assert_eq!(header.method(), &Method::POST);
    assert_eq!(header.url().as_str(), "http://users:8080/users");
    assert_eq!(header.content_type(), "application/json");
    assert_eq!(header.authorization(), None);
}

#[test]
fn with_authorization_ignores_empty_tokens() {
    let header = RequestHeader::new("GET", "http://users:8080/users")
        .expect("header")
        .with_authorization("");
    assert_eq!(header.authorization(), None);

    let header = header
        .with_authorization("Bearer token")
        .with_content_type("text/plain");
    assert_eq!(header.authorization(), Some("Bearer token"));
    assert_eq!(header.content_type(), "text/plain");
}

#[test]
fn new_rejects_invalid_url_and_method() {
    assert_eq!(
        RequestHeader::new("GET", "users/list"),
        Err(RemoteCallDomainError::InvalidUrl("users/list".to_string()))
    );
    assert!(matches!(
        RequestHeader::new("NOT A METHOD", "http://users:8080"),
        Err(RemoteCallDomainError::InvalidMethod(_))
    ));
}
