//! Request logging middleware.
//! Emits one structured event per inbound request, before it is handled.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Request};
use axum::middleware::Next;
use axum::response::Response;

use crate::http::request::RequestIdExt;

/// Log the peer, protocol, method and URI of `req`, then pass it on.
pub async fn log_request(req: Request, next: Next) -> Response {
    let ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map_or_else(|| "-".to_string(), |ConnectInfo(addr)| addr.to_string());
    let uri = req
        .uri()
        .path_and_query()
        .map_or_else(|| req.uri().path().to_string(), ToString::to_string);

    tracing::info!(
        ip = %ip,
        proto = ?req.version(),
        method = %req.method(),
        uri = %uri,
        request_id = req.request_id().unwrap_or("-"),
        "received request"
    );

    next.run(req).await
}
