//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the route table and freeze it
//! - Create the Axum Router: static assets, dispatcher fallback
//! - Wire up middleware (request ID, request log, timeout)
//! - Serve on a listener until shutdown

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;

use crate::config::AppConfig;
use crate::http::assets::serve_static;
use crate::http::handlers::{register_routes, WebState};
use crate::http::middleware::log_request;
use crate::http::request::{UuidRequestId, X_REQUEST_ID};
use crate::routing::{dispatch_fallback, RouteError, RouteTable};
use crate::store::ItemSource;

/// HTTP server for the item pages.
pub struct HttpServer {
    router: Router,
    routes: Arc<RouteTable>,
}

impl HttpServer {
    /// Create a new HTTP server serving items from `items`.
    pub fn new(config: &AppConfig, items: Arc<dyn ItemSource>) -> Result<Self, RouteError> {
        let mut table = RouteTable::new();
        register_routes(&mut table, Arc::new(WebState { items }))?;
        let routes = Arc::new(table);

        tracing::info!(routes = routes.len(), "Route table built");

        let router = Self::build_router(config, routes.clone());
        Ok(Self { router, routes })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig, routes: Arc<RouteTable>) -> Router {
        Router::new()
            .route("/static/{*path}", get(serve_static))
            .fallback(dispatch_fallback)
            .with_state(routes)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(axum::middleware::from_fn(log_request))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
    }

    /// The fully layered router, e.g. for driving requests in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Run the server on `listener` until `shutdown` resolves.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
