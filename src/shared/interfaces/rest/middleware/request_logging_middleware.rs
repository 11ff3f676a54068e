use axum::{
    body::{Body, HttpBody, to_bytes},
    extract::{Request, State},
    http::HeaderValue,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::{
    error_shaping::domain::model::enums::service_error::ServiceError,
    shared::domain::services::text_normalization::generate_random_string,
};

pub const REQUEST_ID_HEADER: &str = "x-request-id";
const REQUEST_ID_LENGTH: usize = 24;
const DEFAULT_BODY_LOG_LIMIT: usize = 2 * 1024 * 1024;

/// Largest body, in bytes, the logging middleware buffers. Larger requests
/// are rejected as malformed; larger or streaming responses pass through
/// without their body being logged.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BodyLogLimit(pub usize);

impl Default for BodyLogLimit {
    fn default() -> Self {
        Self(DEFAULT_BODY_LOG_LIMIT)
    }
}

/// Identifier attached to every request passing through
/// `request_logging_middleware`, available as a request extension.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct RequestId(pub String);

/// Logs every request (route, method, JSON body) and its response (status,
/// body) under a shared request id, echoed in the `x-request-id` header.
pub async fn request_logging_middleware(
    State(BodyLogLimit(limit)): State<BodyLogLimit>,
    request: Request,
    next: Next,
) -> Response {
    let request_id = generate_random_string(REQUEST_ID_LENGTH);

    let (mut parts, body) = request.into_parts();
    let request_bytes = match to_bytes(body, limit).await {
        Ok(bytes) => bytes,
        Err(e) => {
            return ServiceError::malformed(format!("unable to read request body: {e}"))
                .into_response();
        }
    };

    // Non-JSON bodies are logged as an empty object.
    let request_body: Value = serde_json::from_slice(&request_bytes)
        .unwrap_or_else(|_| Value::Object(Default::default()));

    tracing::info!(
        request_id = %request_id,
        route = %parts.uri,
        method = %parts.method,
        body = %request_body,
        "request"
    );

    parts.extensions.insert(RequestId(request_id.clone()));
    let response = next
        .run(Request::from_parts(parts, Body::from(request_bytes)))
        .await;

    let (mut parts, body) = response.into_parts();
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        parts.headers.insert(REQUEST_ID_HEADER, value);
    }

    let buffered = body
        .size_hint()
        .exact()
        .is_some_and(|length| length <= limit as u64);
    if !buffered {
        tracing::info!(
            request_id = %request_id,
            status_code = parts.status.as_u16(),
            body = "{}",
            "response"
        );
        return Response::from_parts(parts, body);
    }

    let response_bytes = match to_bytes(body, limit).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "unable to read response body");
            return Response::from_parts(parts, Body::empty());
        }
    };

    tracing::info!(
        request_id = %request_id,
        status_code = parts.status.as_u16(),
        body = %String::from_utf8_lossy(&response_bytes),
        "response"
    );

    Response::from_parts(parts, Body::from(response_bytes))
}
