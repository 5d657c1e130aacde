//! Shared application state for all routes.

use crate::service::InventoryService;
use crate::store::ItemStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub inventory: InventoryService,
}

impl AppState {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self {
            inventory: InventoryService::new(store),
        }
    }
}
