//! Inventory operations: one store call and one envelope per operation.

use crate::error::StoreError;
use crate::item::Item;
use crate::response::{wrap_error, wrap_success, Wrapped};
use crate::store::ItemStore;
use axum::http::StatusCode;
use std::sync::Arc;

pub const CREATE_FAILED: &str = "Error creating Item!";
pub const UPDATE_FAILED: &str = "Error updating item!";
pub const DELETE_FAILED: &str = "Error deleting item!";
pub const GET_FAILED: &str = "Error getting item!";
pub const GET_ALL_FAILED: &str = "Error getting items!";

/// Outcome of a lookup by id before it is flattened into the envelope.
#[derive(Debug, PartialEq)]
pub enum Lookup {
    Found(Item),
    NotFound,
}

impl Lookup {
    /// Both arms are successes at the boundary; `NotFound` renders as a null result.
    pub fn into_option(self) -> Option<Item> {
        match self {
            Lookup::Found(item) => Some(item),
            Lookup::NotFound => None,
        }
    }
}

#[derive(Clone)]
pub struct InventoryService {
    store: Arc<dyn ItemStore>,
}

impl InventoryService {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// Persist a new item. Any id on the input is dropped so the store assigns one.
    pub async fn create_item(&self, mut item: Item) -> Wrapped<Option<Item>> {
        item.id = None;
        match self.store.upsert(item).await {
            Ok(saved) => {
                tracing::info!(id = ?saved.id, name = %saved.display_name(), "item created");
                wrap_success(Some(saved), StatusCode::CREATED)
            }
            Err(e) => failure(CREATE_FAILED, e),
        }
    }

    /// Replace the stored item with the given one (no field merge).
    pub async fn update_item(&self, item: Item) -> Wrapped<Option<Item>> {
        match self.store.upsert(item).await {
            Ok(saved) => {
                tracing::info!(id = ?saved.id, name = %saved.display_name(), "item updated");
                wrap_success(Some(saved), StatusCode::OK)
            }
            Err(e) => failure(UPDATE_FAILED, e),
        }
    }

    /// Delete and echo the caller's item. Existence is not checked and the row is not re-read.
    pub async fn delete_item(&self, item: Item) -> Wrapped<Option<Item>> {
        match self.store.delete(&item).await {
            Ok(()) => {
                tracing::info!(id = ?item.id, "item deleted");
                wrap_success(Some(item), StatusCode::OK)
            }
            Err(e) => failure(DELETE_FAILED, e),
        }
    }

    pub async fn get_item_by_id(&self, id: i64) -> Wrapped<Option<Item>> {
        match self.lookup(id).await {
            Ok(found) => {
                if found == Lookup::NotFound {
                    tracing::debug!(id, "item not found");
                }
                wrap_success(found.into_option(), StatusCode::OK)
            }
            Err(e) => failure(GET_FAILED, e),
        }
    }

    pub async fn get_all_items(&self) -> Wrapped<Option<Vec<Item>>> {
        match self.store.find_all().await {
            Ok(items) => {
                tracing::debug!(count = items.len(), "items fetched");
                wrap_success(Some(items), StatusCode::OK)
            }
            Err(e) => failure(GET_ALL_FAILED, e),
        }
    }

    pub async fn lookup(&self, id: i64) -> Result<Lookup, StoreError> {
        Ok(match self.store.find_by_id(id).await? {
            Some(item) => Lookup::Found(item),
            None => Lookup::NotFound,
        })
    }

    /// True when the backing store answers.
    pub async fn ready(&self) -> bool {
        self.store.ping().await.is_ok()
    }
}

/// Every error kind maps to the internal-error envelope.
fn failure<T>(message: &str, e: StoreError) -> Wrapped<T> {
    tracing::error!(kind = e.kind.as_str(), error = %e, "{}", message);
    wrap_error(message, e.to_string(), StatusCode::INTERNAL_SERVER_ERROR)
}
