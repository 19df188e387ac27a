//! Metrics exposition.
//!
//! # Metrics
//! - `router_dispatch_total` (counter): dispatch outcomes by `outcome`
//!   (`matched`, `method_not_allowed`, `not_found`)
//!
//! # Design Decisions
//! - Exporter is optional; without it metric updates are no-ops

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}
