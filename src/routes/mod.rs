//! Router assembly.

pub mod common;
pub mod inventory;

pub use common::{common_routes, OPENAPI_PATH};
pub use inventory::{inventory_routes, INVENTORY_BASE_PATH};

use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;

/// Full application router: common routes at the root, inventory under its base path.
pub fn build_app(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest(INVENTORY_BASE_PATH, inventory_routes(state))
        .layer(ServiceBuilder::new().layer(RequestBodyLimitLayer::new(body_limit_bytes)))
}
