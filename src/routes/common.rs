//! Service routes outside the inventory base path: liveness, store readiness,
//! build metadata and the OpenAPI document.

use crate::openapi::ApiDoc;
use crate::routes::INVENTORY_BASE_PATH;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use utoipa::OpenApi;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(Serialize)]
struct LivenessBody {
    status: &'static str,
}

/// `store` reports the item store behind the inventory service, whichever backend it is.
#[derive(Serialize)]
struct ReadinessBody {
    status: &'static str,
    store: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VersionBody {
    name: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InfoBody {
    #[serde(flatten)]
    version: VersionBody,
    api_base_path: &'static str,
    openapi_path: &'static str,
}

fn version_body() -> VersionBody {
    VersionBody {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    }
}

async fn health() -> Json<LivenessBody> {
    Json(LivenessBody { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadinessBody>) {
    if state.inventory.ready().await {
        return (
            StatusCode::OK,
            Json(ReadinessBody {
                status: "ok",
                store: "ok",
            }),
        );
    }
    tracing::warn!("readiness check failed: item store unavailable");
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ReadinessBody {
            status: "degraded",
            store: "unavailable",
        }),
    )
}

async fn version() -> Json<VersionBody> {
    Json(version_body())
}

async fn info() -> Json<InfoBody> {
    Json(InfoBody {
        version: version_body(),
        api_base_path: INVENTORY_BASE_PATH,
        openapi_path: OPENAPI_PATH,
    })
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /health, /ready, /version, /info and the OpenAPI document.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .route("/info", get(info))
        .route(OPENAPI_PATH, get(openapi))
        .with_state(state)
}
