//! Item service: the business layer between the web handlers and storage.
//!
//! Currently a pure pass-through; it exists so that rules about items have a
//! home that is neither HTTP nor SQL.

use std::sync::Arc;

use async_trait::async_trait;

use crate::model::Item;
use crate::store::{ItemSource, StoreResult};

/// Business logic over a backing [`ItemSource`].
#[derive(Clone)]
pub struct ItemService {
    source: Arc<dyn ItemSource>,
}

impl ItemService {
    pub fn new(source: Arc<dyn ItemSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl ItemSource for ItemService {
    async fn items(&self) -> StoreResult<Vec<Item>> {
        self.source.items().await
    }

    async fn item(&self, id: i64) -> StoreResult<Option<Item>> {
        self.source.item(id).await
    }
}
