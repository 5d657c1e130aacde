//! Inventory routes, mounted under [`INVENTORY_BASE_PATH`].
//! `/fetch-all` is a static segment and wins over `/:id`.

use crate::handlers::inventory::{create_item, delete_item, get_all_items, get_item_by_id, update_item};
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub const INVENTORY_BASE_PATH: &str = "/api/v1/inventory-management";

pub fn inventory_routes(state: AppState) -> Router {
    Router::new()
        .route("/", post(create_item).put(update_item).delete(delete_item))
        .route("/fetch-all", get(get_all_items))
        .route("/:id", get(get_item_by_id))
        .with_state(state)
}
