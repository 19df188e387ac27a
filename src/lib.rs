//! itemsrv: a small server that lists stored items as HTML.
//!
//! # Architecture Overview
//!
//! ```text
//!   Client ──▶ request id ──▶ request log ──▶ timeout ──┬──▶ /static/*  (embedded assets)
//!                                                       │
//!                                                       └──▶ routing::dispatch
//!                                                               │  404 / 405
//!                                                               ▼
//!                                                          http::handlers
//!                                                               │
//!                                            service::ItemService ──▶ store::SqliteStore
//!                                                               │
//!                                                          render (askama / JSON)
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod net;
pub mod routing;

// Items
pub mod model;
pub mod render;
pub mod service;
pub mod store;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{param, RouteTable};
