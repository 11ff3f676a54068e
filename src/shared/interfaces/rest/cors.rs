use std::time::Duration;

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;

/// CORS policy shared by every service: credentials allowed for the
/// whitelisted origin(s) only. `whitelisted_domain` may hold several
/// comma-separated origins.
pub fn default_cors_layer(whitelisted_domain: &str) -> CorsLayer {
    let origins: Vec<HeaderValue> = whitelisted_domain
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_LENGTH,
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
        ])
        .allow_credentials(true)
        .max_age(Duration::from_secs(12 * 60 * 60))
}
