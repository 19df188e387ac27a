//! Embedded static assets.
//!
//! # Responsibilities
//! - Bundle the files under `static/` into the binary at build time
//! - Serve them read-only under `/static/`, outside the route table
//!
//! A file added to `static/` must also be listed in `ASSETS`; the tests
//! fail on any file left out.
//!
//! # Design Decisions
//! - Lookup is an exact match on the relative path, so `..` can never
//!   escape the bundle
//! - Content type derived from the file extension

use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::http::response::client_error;

/// A file baked into the binary.
#[derive(Debug, Clone, Copy)]
pub struct Asset {
    pub path: &'static str,
    pub contents: &'static [u8],
}

/// Every file under `static/`, keyed by its path relative to that directory.
static ASSETS: &[Asset] = &[
    Asset {
        path: "css/main.css",
        contents: include_bytes!("../../static/css/main.css"),
    },
    Asset {
        path: "robots.txt",
        contents: include_bytes!("../../static/robots.txt"),
    },
];

/// Find an asset by its path relative to the static root.
pub fn lookup(path: &str) -> Option<&'static Asset> {
    ASSETS.iter().find(|asset| asset.path == path)
}

/// Content-Type for a file extension.
pub fn content_type(extension: Option<&str>) -> &'static str {
    match extension {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js" | "mjs") => "text/javascript; charset=utf-8",
        Some("txt") => "text/plain; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    }
}

/// Serve `/static/{*path}`.
pub async fn serve_static(Path(path): Path<String>) -> Response {
    let Some(asset) = lookup(&path) else {
        tracing::debug!(path = %path, "Static asset not found");
        return client_error(StatusCode::NOT_FOUND);
    };

    let extension = asset.path.rsplit_once('.').map(|(_, ext)| ext);
    (
        [(header::CONTENT_TYPE, content_type(extension))],
        asset.contents,
    )
        .into_response()
}
