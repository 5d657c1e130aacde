//! Inventory service: CRUD over items with a uniform response envelope.

pub mod config;
pub mod error;
pub mod handlers;
pub mod item;
pub mod migration;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{Settings, StoreBackend};
pub use error::{AppError, ConfigError, ErrorKind, StoreError};
pub use item::Item;
pub use migration::apply_migrations;
pub use response::{wrap_error, wrap_success, ApiResponse};
pub use routes::{build_app, common_routes, inventory_routes, INVENTORY_BASE_PATH};
pub use service::{InventoryService, RequestValidator};
pub use state::AppState;
pub use store::{ensure_database_exists, ItemStore, MemoryItemStore, PgItemStore};
