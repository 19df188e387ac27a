//! Dispatch of matched requests.
//!
//! # Responsibilities
//! - Turn a table lookup into an HTTP outcome
//! - 404 for unknown paths, 405 + `Allow` for wrong methods
//! - Attach captured parameters and invoke the handler
//!
//! Routes match the percent-decoded path. A path that does not decode to
//! UTF-8 cannot match any pattern and is a 404.
//!
//! # Design Decisions
//! - No retries and no error translation: once a handler runs, its
//!   response is passed through untouched
//! - Cancellation is left to the server and the handler

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::Response;
use percent_encoding::percent_decode_str;

use super::params;
use super::table::{allow_header_value, MatchResult, RouteTable};
use crate::http::response::{client_error, describe_status};

/// Route `req` through `table`.
pub async fn dispatch(table: &RouteTable, mut req: Request) -> Response {
    let method = req.method().clone();
    let path = match percent_decode_str(req.uri().path()).decode_utf8() {
        Ok(path) => path.into_owned(),
        Err(_) => {
            metrics::counter!("router_dispatch_total", "outcome" => "not_found").increment(1);
            tracing::debug!(
                method = %method,
                path = %req.uri().path(),
                status = %describe_status(StatusCode::NOT_FOUND),
                "Path is not valid UTF-8 once decoded"
            );
            return client_error(StatusCode::NOT_FOUND);
        }
    };

    match table.match_route(&method, &path) {
        MatchResult::Matched { route, params } => {
            metrics::counter!("router_dispatch_total", "outcome" => "matched").increment(1);
            tracing::debug!(
                method = %method,
                path = %path,
                pattern = route.pattern(),
                params = ?params,
                "Route matched"
            );
            params::attach(&mut req, params);
            route.call(req).await
        }
        MatchResult::MethodNotAllowed { allowed } => {
            metrics::counter!("router_dispatch_total", "outcome" => "method_not_allowed")
                .increment(1);
            let allow = allow_header_value(&allowed);
            tracing::debug!(
                method = %method,
                path = %path,
                allow = %allow,
                status = %describe_status(StatusCode::METHOD_NOT_ALLOWED),
                "Method not allowed"
            );
            let mut response = client_error(StatusCode::METHOD_NOT_ALLOWED);
            if let Ok(value) = HeaderValue::from_str(&allow) {
                response.headers_mut().insert(header::ALLOW, value);
            }
            response
        }
        MatchResult::NotFound => {
            metrics::counter!("router_dispatch_total", "outcome" => "not_found").increment(1);
            tracing::debug!(
                method = %method,
                path = %path,
                status = %describe_status(StatusCode::NOT_FOUND),
                "No route matched"
            );
            client_error(StatusCode::NOT_FOUND)
        }
    }
}

/// Axum fallback: everything not claimed by another service lands here.
pub async fn dispatch_fallback(State(table): State<Arc<RouteTable>>, req: Request) -> Response {
    dispatch(&table, req).await
}
