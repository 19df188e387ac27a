//! Item storage subsystem.
//!
//! # Data Flow
//! ```text
//! web handlers
//!     → service (ItemService, pass-through)
//!     → ItemSource (trait seam)
//!     → sqlite.rs (SqliteStore over an sqlx pool)
//! ```
//!
//! # Design Decisions
//! - Read path only on the serving side; inserts exist for tooling and tests
//! - Schema applied on first open when the database has no tables
//! - Single pooled connection, SQLite serializes writers anyway

pub mod sqlite;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::Item;

pub use sqlite::SqliteStore;

/// Errors raised by item storage.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Any failure reported by the database driver.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored creation time cannot be represented.
    #[error("item {id} has an out of range creation time ({secs})")]
    InvalidTimestamp { id: i64, secs: i64 },
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Read access to stored items.
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// All items, ordered by id.
    async fn items(&self) -> StoreResult<Vec<Item>>;

    /// A single item, `None` if no row has this id.
    async fn item(&self, id: i64) -> StoreResult<Option<Item>>;
}
