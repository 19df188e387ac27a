//! SQLite storage implementation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::{Connection, Row};

use super::{ItemSource, StoreError, StoreResult};
use crate::model::Item;

const SCHEMA: &str = include_str!("sql/schema.sql");
const SAMPLE_ITEMS: &str = include_str!("sql/sample_items.sql");

/// SQLite-backed item store.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
    path: PathBuf,
}

impl SqliteStore {
    /// Open (creating if absent) the database at `path`.
    ///
    /// A database without any tables gets the item schema applied, plus a
    /// handful of sample items when `seed_sample_items` is set.
    pub async fn open(path: impl AsRef<Path>, seed_sample_items: bool) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        pool.acquire().await?.ping().await?;

        let existing: Option<String> =
            sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type = 'table' LIMIT 1")
                .fetch_optional(&pool)
                .await?;

        if existing.is_none() {
            tracing::info!(path = %path.display(), "Applying item schema to new database");
            sqlx::raw_sql(SCHEMA).execute(&pool).await?;
            if seed_sample_items {
                sqlx::raw_sql(SAMPLE_ITEMS).execute(&pool).await?;
            }
        }

        Ok(Self { pool, path })
    }

    /// Insert an item, returning its id.
    pub async fn insert(
        &self,
        title: &str,
        description: &str,
        created: DateTime<Utc>,
    ) -> StoreResult<i64> {
        let result = sqlx::query("INSERT INTO items (title, description, created) VALUES (?, ?, ?)")
            .bind(title)
            .bind(description)
            .bind(created.timestamp())
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Close the connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::debug!(path = %self.path.display(), "SQLite store closed");
    }
}

fn item_from_row(row: &SqliteRow) -> StoreResult<Item> {
    let id: i64 = row.try_get("id")?;
    let secs: i64 = row.try_get("created")?;
    let created =
        DateTime::<Utc>::from_timestamp(secs, 0).ok_or(StoreError::InvalidTimestamp { id, secs })?;

    Ok(Item {
        id,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        created,
    })
}

#[async_trait]
impl ItemSource for SqliteStore {
    async fn items(&self) -> StoreResult<Vec<Item>> {
        let rows = sqlx::query("SELECT id, title, description, created FROM items ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(item_from_row).collect()
    }

    async fn item(&self, id: i64) -> StoreResult<Option<Item>> {
        let row = sqlx::query("SELECT id, title, description, created FROM items WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(item_from_row).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[tokio::test]
    async fn test_new_database_gets_sample_items() {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStore::open(dir.path().join("items.db"), true).await.unwrap();

        let items = store.items().await.unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].title, "Item 1");
        assert_eq!(items[3].description, "Description for Item 4");
    }

    #[tokio::test]
    async fn test_unseeded_database_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStore::open(dir.path().join("items.db"), false).await.unwrap();
        assert!(store.items().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_existing_database_is_not_reseeded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.db");

        let store = SqliteStore::open(&path, true).await.unwrap();
        store.close().await;

        let reopened = SqliteStore::open(&path, true).await.unwrap();
        assert_eq!(reopened.items().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_insert_and_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStore::open(dir.path().join("items.db"), false).await.unwrap();
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();

        let id = store.insert("Kettle", "Boils water", created).await.unwrap();

        let item = store.item(id).await.unwrap().unwrap();
        assert_eq!(
            item,
            Item {
                id,
                title: "Kettle".into(),
                description: "Boils water".into(),
                created,
            }
        );
        assert!(store.item(id + 1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_open_fails_in_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("items.db");
        let err = SqliteStore::open(&path, false).await.unwrap_err();
        assert!(matches!(err, StoreError::Database(_)));
    }
}
