//! Response construction.
//!
//! # Responsibilities
//! - Serve cached or fresh payloads as `application/json`
//! - Map request-path errors to plain-text HTTP errors
//!
//! # Design Decisions
//! - Error bodies are generic text; source details stay in the logs
//! - CORS headers are added by a layer, not here

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::error::ProxyError;

/// 200 with the JSON payload.
pub fn json_payload(body: Bytes) -> Response {
    let mut response = Response::new(Body::from(body));
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}

/// 200 with an empty body, for CORS preflight.
pub fn preflight() -> Response {
    StatusCode::OK.into_response()
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status_code(), self.public_message()).into_response()
    }
}
