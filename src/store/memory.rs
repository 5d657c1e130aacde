//! In-process item store with sequence-assigned ids. Used by tests and `STORE_BACKEND=memory`.

use super::ItemStore;
use crate::error::StoreError;
use crate::item::Item;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryItemStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, Item>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Inner {
    fn insert(&mut self, mut item: Item) -> Item {
        self.next_id += 1;
        let now = Utc::now().naive_utc();
        item.id = Some(self.next_id);
        item.created_at = Some(now);
        item.updated_at = Some(now);
        self.rows.insert(self.next_id, item.clone());
        item
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn upsert(&self, mut item: Item) -> Result<Item, StoreError> {
        let mut inner = self.inner.write().await;
        let existing = item.id.and_then(|id| inner.rows.get(&id).map(|row| (id, row.created_at)));
        match existing {
            Some((id, created_at)) => {
                item.created_at = created_at;
                item.updated_at = Some(Utc::now().naive_utc());
                inner.rows.insert(id, item.clone());
                Ok(item)
            }
            None => Ok(inner.insert(item)),
        }
    }

    async fn delete(&self, item: &Item) -> Result<(), StoreError> {
        if let Some(id) = item.id {
            self.inner.write().await.rows.remove(&id);
        }
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, StoreError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Item>, StoreError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }
}
