use chrono::{DateTime, Utc};
use serde::Serialize;

/// A stored item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Row id in the database.
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Creation time, stored as unix seconds.
    pub created: DateTime<Utc>,
}
