//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → middleware/ (request log line)
//!     → /static/*  → assets.rs (embedded files)
//!     → otherwise  → routing::dispatch → handlers.rs
//!     → response.rs (error responses)
//! ```

pub mod assets;
pub mod handlers;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestIdExt, UuidRequestId, X_REQUEST_ID};
pub use server::HttpServer;
