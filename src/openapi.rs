//! OpenAPI document for the inventory routes.

use crate::handlers::inventory;
use crate::item::Item;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Inventory management API"),
    paths(
        inventory::create_item,
        inventory::update_item,
        inventory::delete_item,
        inventory::get_item_by_id,
        inventory::get_all_items,
    ),
    components(schemas(Item)),
    tags((name = "inventory", description = "Item CRUD with uniform response envelopes"))
)]
pub struct ApiDoc;
