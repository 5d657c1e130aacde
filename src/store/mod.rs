//! Item persistence: the [`ItemStore`] seam plus PostgreSQL and in-memory backends.

mod memory;
mod postgres;

pub use memory::MemoryItemStore;
pub use postgres::{ensure_database_exists, PgItemStore};

use crate::error::StoreError;
use crate::item::Item;
use async_trait::async_trait;

/// Generic CRUD over the `item` table. The store owns id assignment and timestamp stamping.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Insert when `id` is absent, otherwise replace the row with that id. A row that no longer
    /// exists is inserted again under a fresh id.
    async fn upsert(&self, item: Item) -> Result<Item, StoreError>;

    /// Delete by the item's id. Missing rows and items without an id are a no-op.
    async fn delete(&self, item: &Item) -> Result<(), StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, StoreError>;

    /// All rows ordered by id.
    async fn find_all(&self) -> Result<Vec<Item>, StoreError>;

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
