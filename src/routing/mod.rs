//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Registration (at startup):
//!     (method, pattern, handler)
//!     → route.rs (compile anchored regex)
//!     → table.rs (append in registration order)
//!     → Freeze as Arc<RouteTable>
//!
//! Incoming Request (method, path)
//!     → table.rs (linear scan, collect allowed methods)
//!     → dispatch.rs (404 / 405 / invoke handler)
//!     → params.rs (captured groups readable by the handler)
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Deterministic: same input always matches same route
//! - First path+method match wins, in registration order
//! - A path match with the wrong method keeps scanning so that every
//!   valid method for the path ends up in the `Allow` header

pub mod dispatch;
pub mod params;
pub mod route;
pub mod table;

pub use dispatch::{dispatch, dispatch_fallback};
pub use params::param;
pub use route::{Route, RouteError, RouteHandler};
pub use table::{MatchResult, RouteTable};
