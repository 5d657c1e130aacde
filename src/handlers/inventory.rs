//! Inventory handlers: decode and validate the request, then hand off to [`InventoryService`](crate::service::InventoryService).

use crate::error::AppError;
use crate::item::Item;
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidId(format!("invalid id: {}", id_str)))
}

fn body_item(payload: Result<Json<Item>, JsonRejection>) -> Result<Item, AppError> {
    payload
        .map(|Json(item)| item)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

#[utoipa::path(
    post,
    path = "/api/v1/inventory-management",
    tag = "inventory",
    request_body = Item,
    responses(
        (status = 201, description = "Item created"),
        (status = 400, description = "Malformed body or constraint violation"),
        (status = 500, description = "Error creating Item!")
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<Item>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let item = body_item(payload)?;
    tracing::info!(name = %item.display_name(), "creating inventory item");
    RequestValidator::validate(&item)?;
    Ok(state.inventory.create_item(item).await)
}

#[utoipa::path(
    put,
    path = "/api/v1/inventory-management",
    tag = "inventory",
    request_body = Item,
    responses(
        (status = 200, description = "Item updated"),
        (status = 400, description = "Malformed body, missing id or constraint violation"),
        (status = 500, description = "Error updating item!")
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    payload: Result<Json<Item>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let item = body_item(payload)?;
    tracing::info!(id = ?item.id, "updating inventory item");
    RequestValidator::validate_existing(&item)?;
    Ok(state.inventory.update_item(item).await)
}

#[utoipa::path(
    delete,
    path = "/api/v1/inventory-management",
    tag = "inventory",
    request_body = Item,
    responses(
        (status = 200, description = "Item deleted; the request item is echoed"),
        (status = 400, description = "Malformed body, missing id or constraint violation"),
        (status = 500, description = "Error deleting item!")
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    payload: Result<Json<Item>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let item = body_item(payload)?;
    tracing::info!(id = ?item.id, "deleting inventory item");
    RequestValidator::validate_existing(&item)?;
    Ok(state.inventory.delete_item(item).await)
}

#[utoipa::path(
    get,
    path = "/api/v1/inventory-management/{id}",
    tag = "inventory",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item, or null result when no item has this id"),
        (status = 400, description = "Id is not an integer"),
        (status = 500, description = "Error getting item!")
    )
)]
pub async fn get_item_by_id(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    tracing::info!(id, "fetching inventory item");
    Ok(state.inventory.get_item_by_id(id).await)
}

#[utoipa::path(
    get,
    path = "/api/v1/inventory-management/fetch-all",
    tag = "inventory",
    responses(
        (status = 200, description = "All items"),
        (status = 500, description = "Error getting items!")
    )
)]
pub async fn get_all_items(State(state): State<AppState>) -> impl IntoResponse {
    tracing::info!("fetching all inventory items");
    state.inventory.get_all_items().await
}
