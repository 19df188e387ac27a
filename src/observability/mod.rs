//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (counters via `metrics`)
//!
//! Consumers:
//!     → Log aggregation (stdout, JSON lines)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Request ID flows into the request log line
//! - Metrics are cheap (atomic increments) and a no-op without an exporter

pub mod logging;
pub mod metrics;

pub use self::logging::{init_logging, LoggingError};
pub use self::metrics::init_metrics;
