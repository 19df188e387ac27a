//! Response helpers for error outcomes.
//!
//! # Responsibilities
//! - Plain-text client error responses (404, 405, ...)
//! - Generic 500 responses that log the real cause
//!
//! # Design Decisions
//! - Error bodies are the canonical reason phrase only; internal detail
//!   goes to the log, never to the client

use std::fmt::Display;

use axum::extract::Request;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

/// Plain-text response carrying the canonical reason for `status`.
pub fn client_error(status: StatusCode) -> Response {
    let reason = status.canonical_reason().unwrap_or("Unknown Status");
    let mut response = (status, format!("{reason}\n")).into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    response
}

/// Log `err` against the request and answer with a bare 500.
pub fn server_error(req: &Request, err: &dyn Display) -> Response {
    let uri = req
        .uri()
        .path_and_query()
        .map_or_else(|| req.uri().path().to_string(), ToString::to_string);
    tracing::error!(
        uri = %uri,
        method = %req.method(),
        error = %err,
        "Request failed"
    );
    client_error(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Render a status as `(405) Method Not Allowed`.
pub fn describe_status(status: StatusCode) -> String {
    format!(
        "({}) {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown Status")
    )
}
