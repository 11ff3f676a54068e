use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
    routing::get,
};
use microservice_toolkit::{
    error_shaping::{
        domain::model::enums::service_error::ServiceError,
        interfaces::rest::resources::error_envelope_resource::ErrorEnvelopeResource,
    },
    query_params::interfaces::rest::extractors::query_parameters::QueryParameters,
};
use tower::ServiceExt;

fn router() -> Router {
    Router::new().route(
        "/items",
        get(|query: QueryParameters| async move {
            let active = query.bool_or("active", true)?;
            let limit = query.mandatory_u64("limit")?;
            Ok::<_, ServiceError>(format!("{active}:{limit}"))
        }),
    )
}

async fn call(uri: &str) -> (StatusCode, Vec<u8>) {
    let response = router()
        .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, bytes.to_vec())
}

#[tokio::test]
async fn extractor_reads_query_string() {
    let (status, bytes) = call("/items?active=false&limit=10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"false:10");
}

#[tokio::test]
async fn extractor_errors_render_as_bad_request_envelope() {
    let (status, bytes) = call("/items?active=maybe&limit=10").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let envelope: ErrorEnvelopeResource = serde_json::from_slice(&bytes).expect("envelope");
    assert_eq!(envelope.errors.len(), 1);
    assert_eq!(envelope.errors[0].param, "");
    assert_eq!(
        envelope.errors[0].detail,
        "query parameter 'active' value should be true or false (omit the key and default value 'true' will be applied)"
    );
}
