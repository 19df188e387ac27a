//! Route table and lookup.
//!
//! # Responsibilities
//! - Store compiled routes in registration order
//! - Look up the route for a (method, path) pair
//! - Report 404 vs 405 explicitly, with the allowed methods for 405
//!
//! # Design Decisions
//! - Mutated only through `&mut self` during startup, then shared via `Arc`
//! - O(n) regex scan (acceptable for typical route counts)
//! - Explicit NotFound rather than silent default

use std::future::Future;

use axum::extract::Request;
use axum::http::Method;
use axum::response::Response;

use super::route::{Route, RouteError};

/// Outcome of looking up a request in the table.
#[derive(Debug)]
pub enum MatchResult<'a> {
    /// Path and method matched; `params` are the route's captured groups.
    Matched { route: &'a Route, params: Vec<String> },
    /// At least one pattern matched the path, none for this method.
    MethodNotAllowed { allowed: Vec<Method> },
    /// No pattern matched the path.
    NotFound,
}

/// Ordered list of registered routes.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile `pattern` and append the route.
    pub fn register<H, Fut>(
        &mut self,
        method: Method,
        pattern: &str,
        handler: H,
    ) -> Result<(), RouteError>
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        let route = Route::new(method, pattern, handler)?;
        tracing::debug!(method = %route.method(), pattern = route.pattern(), "Route registered");
        self.routes.push(route);
        Ok(())
    }

    /// Find the route for `method` and `path`.
    pub fn match_route(&self, method: &Method, path: &str) -> MatchResult<'_> {
        let mut allowed: Vec<Method> = Vec::new();

        for route in &self.routes {
            let Some(params) = route.captures(path) else {
                continue;
            };

            if route.method() == method {
                return MatchResult::Matched { route, params };
            }

            if !allowed.contains(route.method()) {
                allowed.push(route.method().clone());
            }
        }

        if allowed.is_empty() {
            MatchResult::NotFound
        } else {
            MatchResult::MethodNotAllowed { allowed }
        }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }
}

/// Join methods for the `Allow` header, e.g. `GET,POST`.
pub fn allow_header_value(allowed: &[Method]) -> String {
    allowed
        .iter()
        .map(Method::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    async fn ok(_req: Request) -> Response {
        "ok".into_response()
    }

    fn table(routes: &[(Method, &str)]) -> RouteTable {
        let mut table = RouteTable::new();
        for (method, pattern) in routes {
            table.register(method.clone(), pattern, ok).unwrap();
        }
        table
    }

    #[test]
    fn test_single_route_scenario() {
        let table = table(&[(Method::GET, "/items/([0-9]+)")]);

        match table.match_route(&Method::GET, "/items/42") {
            MatchResult::Matched { route, params } => {
                assert_eq!(route.pattern(), "/items/([0-9]+)");
                assert_eq!(params, vec!["42".to_string()]);
            }
            other => panic!("expected match, got {other:?}"),
        }

        match table.match_route(&Method::POST, "/items/42") {
            MatchResult::MethodNotAllowed { allowed } => {
                assert_eq!(allow_header_value(&allowed), "GET");
            }
            other => panic!("expected 405, got {other:?}"),
        }

        assert!(matches!(
            table.match_route(&Method::GET, "/other"),
            MatchResult::NotFound
        ));
    }

    #[test]
    fn test_allowed_methods_collected_across_all_matches() {
        let table = table(&[(Method::GET, "/x"), (Method::POST, "/x")]);

        match table.match_route(&Method::PUT, "/x") {
            MatchResult::MethodNotAllowed { allowed } => {
                assert_eq!(allowed, vec![Method::GET, Method::POST]);
                assert_eq!(allow_header_value(&allowed), "GET,POST");
            }
            other => panic!("expected 405, got {other:?}"),
        }
    }

    #[test]
    fn test_allowed_methods_deduplicated_in_discovery_order() {
        let table = table(&[
            (Method::POST, "/items/([0-9]+)"),
            (Method::GET, "/items/.*"),
            (Method::POST, "/items/[0-9]+"),
        ]);

        match table.match_route(&Method::DELETE, "/items/7") {
            MatchResult::MethodNotAllowed { allowed } => {
                assert_eq!(allowed, vec![Method::POST, Method::GET]);
            }
            other => panic!("expected 405, got {other:?}"),
        }
    }

    #[test]
    fn test_first_matching_route_wins() {
        let table = table(&[
            (Method::GET, "/items/(new)"),
            (Method::GET, "/items/([a-z]+)"),
        ]);

        match table.match_route(&Method::GET, "/items/new") {
            MatchResult::Matched { route, params } => {
                assert_eq!(route.pattern(), "/items/(new)");
                assert_eq!(params, vec!["new".to_string()]);
            }
            other => panic!("expected match, got {other:?}"),
        }
    }

    #[test]
    fn test_method_match_after_mismatch() {
        let table = table(&[(Method::POST, "/x"), (Method::GET, "/(x)")]);

        match table.match_route(&Method::GET, "/x") {
            MatchResult::Matched { route, params } => {
                assert_eq!(route.pattern(), "/(x)");
                assert_eq!(params, vec!["x".to_string()]);
            }
            other => panic!("expected match, got {other:?}"),
        }
    }

    #[test]
    fn test_not_found_regardless_of_method() {
        let table = table(&[(Method::GET, "/"), (Method::POST, "/items")]);
        for method in [Method::GET, Method::POST, Method::DELETE] {
            assert!(matches!(
                table.match_route(&method, "/missing"),
                MatchResult::NotFound
            ));
        }
    }

    #[test]
    fn test_lookup_is_idempotent() {
        let table = table(&[(Method::GET, "/items/([0-9]+)"), (Method::POST, "/items/([0-9]+)")]);
        for _ in 0..3 {
            match table.match_route(&Method::POST, "/items/9") {
                MatchResult::Matched { route, params } => {
                    assert_eq!(route.method(), &Method::POST);
                    assert_eq!(params, vec!["9".to_string()]);
                }
                other => panic!("expected match, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_empty_table() {
        let table = RouteTable::new();
        assert!(table.is_empty());
        assert!(matches!(
            table.match_route(&Method::GET, "/"),
            MatchResult::NotFound
        ));
    }
}
