//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ListenerConfig.bind_address
//!     → listener.rs (normalize `:port`, bind)
//!     → tokio TcpListener handed to the HTTP server
//! ```

pub mod listener;

pub use listener::{bind, normalize_bind_address, ListenerError};
