use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
    routing::get,
};
use microservice_toolkit::shared::interfaces::rest::cors::default_cors_layer;
use tower::ServiceExt;

fn router() -> Router {
    Router::new()
        .route("/orders", get(|| async { "orders" }))
        .layer(default_cors_layer(
            "https://shop.example.com, https://admin.example.com",
        ))
}

async fn preflight(origin: &str) -> axum::response::Response {
    router()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/orders")
                .header(header::ORIGIN, origin)
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response")
}

#[tokio::test]
async fn preflight_allows_whitelisted_origins_with_credentials() {
    for origin in ["https://shop.example.com", "https://admin.example.com"] {
        let response = preflight(origin).await;

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], origin);
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
        assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "43200");
    }
}

#[tokio::test]
async fn preflight_ignores_unknown_origin() {
    let response = preflight("https://evil.example.com").await;

    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}
