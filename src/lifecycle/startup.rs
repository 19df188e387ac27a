//! Startup orchestration.
//!
//! # Responsibilities
//! - Open the item store and wrap it in the service layer
//! - Build the HTTP server (route table frozen here)
//! - Bind the listener and serve until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Subsystems initialize in order, not concurrently
//! - Listeners start last (traffic only when ready)

use std::future::Future;
use std::net::{AddrParseError, SocketAddr};
use std::sync::Arc;

use metrics_exporter_prometheus::BuildError;
use thiserror::Error;

use crate::config::AppConfig;
use crate::http::HttpServer;
use crate::lifecycle::signals::shutdown_signal;
use crate::net::{self, ListenerError};
use crate::observability::init_metrics;
use crate::routing::RouteError;
use crate::service::ItemService;
use crate::store::{SqliteStore, StoreError};

/// Anything that prevents the server from starting or keeps it from serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("unable to open item store: {0}")]
    Store(#[from] StoreError),

    #[error("unable to build routes: {0}")]
    Routes(#[from] RouteError),

    #[error(transparent)]
    Listener(#[from] ListenerError),

    #[error("invalid metrics address: {0}")]
    MetricsAddress(#[from] AddrParseError),

    #[error("unable to start metrics exporter: {0}")]
    Metrics(#[from] BuildError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Start the server and run until SIGINT/SIGTERM.
pub async fn start(config: AppConfig) -> Result<(), StartupError> {
    serve(config, shutdown_signal()).await
}

/// Start the server and run until `shutdown` resolves.
pub async fn serve<F>(config: AppConfig, shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        init_metrics(addr)?;
    }

    let store = SqliteStore::open(&config.database.path, config.database.seed_sample_items).await?;
    tracing::info!(path = %store.path().display(), "Item store ready");

    let service = ItemService::new(Arc::new(store.clone()));
    let server = HttpServer::new(&config, Arc::new(service))?;

    let listener = net::bind(&config.listener).await?;
    tracing::info!("Listening on {}...", listener.local_addr()?);

    server.run(listener, shutdown).await?;

    store.close().await;
    Ok(())
}
