// --- File: crates/kickndji_common/src/http.rs ---
use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

// Include the client module
pub mod client;

/// Header values attached to every response of the public endpoints.
pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_HEADERS: &str = "Content-Type";

/// Builds a JSON response carrying the permissive cross-origin headers.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => with_cors(status, "application/json", Body::from(bytes)),
        Err(e) => {
            error!("Failed to serialize response body: {}", e);
            with_cors(
                StatusCode::INTERNAL_SERVER_ERROR,
                "application/json",
                Body::from(r#"{"error":"internal error"}"#),
            )
        }
    }
}

/// Builds a plain-text response carrying the permissive cross-origin headers.
pub fn text_response(status: StatusCode, body: &'static str) -> Response {
    with_cors(status, "text/plain; charset=utf-8", Body::from(body))
}

fn with_cors(status: StatusCode, content_type: &'static str, body: Body) -> Response {
    let mut response = (status, body).into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(CORS_ALLOW_ORIGIN),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(CORS_ALLOW_HEADERS),
    );
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}
