//! A single compiled route.
//!
//! # Responsibilities
//! - Compile a path pattern into a regex anchored at both ends
//! - Box the handler into a uniform callable type
//!
//! # Design Decisions
//! - The pattern is wrapped as `^(?:pattern)$`, so an alternation such as
//!   `/a|/b` can never match a prefix or suffix of the path
//! - Captured groups keep their numbering: the wrapper group is non-capturing

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use axum::extract::Request;
use axum::http::Method;
use axum::response::Response;
use futures_util::future::BoxFuture;
use regex::Regex;
use thiserror::Error;

/// Boxed async request handler.
pub type RouteHandler = Arc<dyn Fn(Request) -> BoxFuture<'static, Response> + Send + Sync>;

/// Errors raised while building the route table.
#[derive(Debug, Error)]
pub enum RouteError {
    /// The path pattern is not valid regex grammar.
    #[error("invalid route pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A (method, path pattern, handler) triple.
#[derive(Clone)]
pub struct Route {
    method: Method,
    pattern: String,
    regex: Regex,
    handler: RouteHandler,
}

impl Route {
    /// Compile `pattern` and box `handler`.
    pub fn new<H, Fut>(method: Method, pattern: &str, handler: H) -> Result<Self, RouteError>
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
            RouteError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            }
        })?;

        let handler: RouteHandler =
            Arc::new(move |req: Request| -> BoxFuture<'static, Response> { Box::pin(handler(req)) });

        Ok(Self {
            method,
            pattern: pattern.to_string(),
            regex,
            handler,
        })
    }

    /// HTTP method this route accepts.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Pattern as registered (without the anchors).
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Match the whole path, returning the captured sub-groups in order.
    ///
    /// Groups that did not take part in the match are returned as empty strings.
    pub fn captures(&self, path: &str) -> Option<Vec<String>> {
        let caps = self.regex.captures(path)?;
        Some(
            caps.iter()
                .skip(1)
                .map(|group| group.map_or_else(String::new, |m| m.as_str().to_string()))
                .collect(),
        )
    }

    /// Invoke the handler.
    pub fn call(&self, req: Request) -> BoxFuture<'static, Response> {
        (self.handler)(req)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}
