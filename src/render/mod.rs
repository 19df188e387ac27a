//! Response rendering.
//!
//! # Responsibilities
//! - Render askama page templates into HTML responses
//! - Marshal serializable data into JSON responses
//! - Human friendly dates for the templates
//!
//! # Design Decisions
//! - Output is rendered into a buffer before any status is chosen, so a
//!   template failure becomes a clean 500 rather than a truncated page
//! - Templates are compiled into the binary from `templates/`

pub mod pages;

use askama::Template;
use axum::extract::Request;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::http::response::server_error;

pub use pages::{IndexPage, ItemPage, ItemView};

/// Render `template` with `status`, or a 500 if rendering fails.
pub fn render_template<T: Template>(req: &Request, status: StatusCode, template: &T) -> Response {
    match template.render() {
        Ok(body) => (
            status,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(e) => server_error(req, &e),
    }
}

/// Serialize `data` as JSON with `status`, or a 500 if that fails.
pub fn render_json<T: Serialize + ?Sized>(req: &Request, status: StatusCode, data: &T) -> Response {
    match serde_json::to_vec(data) {
        Ok(body) => (status, [(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => server_error(req, &e),
    }
}

/// Clock time for anything under a day old, the date otherwise.
pub fn human_date(created: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if now.signed_duration_since(created) < Duration::hours(24) {
        created.format("%H:%M").to_string()
    } else {
        created.format("%d %b %Y").to_string()
    }
}
