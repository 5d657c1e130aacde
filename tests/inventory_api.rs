use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use inventory_service::{build_app, AppState, Item, ItemStore, MemoryItemStore, StoreError};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

const BASE: &str = "/api/v1/inventory-management";

struct BrokenStore;

#[async_trait]
impl ItemStore for BrokenStore {
    async fn upsert(&self, _item: Item) -> Result<Item, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }
    async fn delete(&self, _item: &Item) -> Result<(), StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }
    async fn find_by_id(&self, _id: i64) -> Result<Option<Item>, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }
    async fn find_all(&self) -> Result<Vec<Item>, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }
    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }
}

fn app_with(store: Arc<dyn ItemStore>) -> Router {
    build_app(AppState::new(store), 1024 * 1024)
}

fn memory_app() -> (Router, Arc<MemoryItemStore>) {
    let store = Arc::new(MemoryItemStore::new());
    (app_with(store.clone()), store)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn widget() -> Value {
    json!({"name": "Widget", "quantity": 5, "price": 9.99})
}

#[tokio::test]
async fn widget_scenario_over_http() {
    let (app, _) = memory_app();

    let (status, body) = send(&app, Method::POST, BASE, Some(widget())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["statusCode"], "CREATED");
    assert_eq!(body["statusMessage"], "Success");
    assert_eq!(body["result"]["id"], 1);
    assert_eq!(body["result"]["name"], "Widget");
    assert!(body["result"]["price"].is_number());
    assert_eq!(body["result"]["price"], json!(9.99));
    assert!(body.get("errorType").is_none());
    let created = body["result"].clone();

    let (status, body) = send(&app, Method::GET, &format!("{}/1", BASE), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], created);

    let (status, body) = send(&app, Method::DELETE, BASE, Some(created.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], created);

    let (status, body) = send(&app, Method::GET, &format!("{}/1", BASE), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["statusMessage"], "Success");
    assert_eq!(body["result"], Value::Null);
}

#[tokio::test]
async fn update_replaces_whole_record() {
    let (app, _) = memory_app();
    let (_, body) = send(
        &app,
        Method::POST,
        BASE,
        Some(json!({"name": "Widget", "description": "blue", "quantity": 5, "price": 9.99})),
    )
    .await;
    let id = body["result"]["id"].clone();

    let (status, body) = send(
        &app,
        Method::PUT,
        BASE,
        Some(json!({"id": id, "name": "Gadget", "quantity": 8, "price": 1.5})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["statusCode"], "OK");
    assert_eq!(body["result"]["name"], "Gadget");
    assert_eq!(body["result"]["description"], Value::Null);
    assert_eq!(body["result"]["quantity"], 8);
    assert_eq!(body["result"]["price"], json!(1.5));

    let (_, fetched) = send(&app, Method::GET, &format!("{}/{}", BASE, id), None).await;
    assert_eq!(fetched["result"], body["result"]);
}

#[tokio::test]
async fn fetch_all_lists_every_item() {
    let (app, _) = memory_app();
    let (status, body) = send(&app, Method::GET, &format!("{}/fetch-all", BASE), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], json!([]));

    send(&app, Method::POST, BASE, Some(widget())).await;
    send(&app, Method::POST, BASE, Some(json!({"name": "Gizmo", "quantity": 1, "price": 0}))).await;

    let (status, body) = send(&app, Method::GET, &format!("{}/fetch-all", BASE), None).await;
    assert_eq!(status, StatusCode::OK);
    let items = body["result"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Widget");
    assert_eq!(items[1]["name"], "Gizmo");
}

#[tokio::test]
async fn delete_of_unknown_id_still_echoes() {
    let (app, _) = memory_app();
    let item = json!({"id": 99, "name": "Ghost", "quantity": 0, "price": 1});
    let (status, body) = send(&app, Method::DELETE, BASE, Some(item)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["id"], 99);
    assert_eq!(body["result"]["name"], "Ghost");
}

#[tokio::test]
async fn validation_failure_is_client_error_and_skips_store() {
    let (app, store) = memory_app();
    let (status, body) = send(
        &app,
        Method::POST,
        BASE,
        Some(json!({"name": " ", "quantity": 20000, "price": -1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["statusCode"], "BAD_REQUEST");
    assert_eq!(body["statusMessage"], "Validation failed");
    let detail = body["errorType"].as_str().unwrap();
    assert!(detail.contains("Name cannot be blank"));
    assert!(detail.contains("Quantity cannot exceed 10,000"));
    assert!(detail.contains("Price cannot be negative"));
    assert!(body.get("result").is_none());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn missing_name_and_price_are_field_violations() {
    let (app, store) = memory_app();
    let (status, body) = send(&app, Method::POST, BASE, Some(json!({"quantity": 1}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["statusMessage"], "Validation failed");
    let detail = body["errorType"].as_str().unwrap();
    assert!(detail.contains("Name cannot be blank"));
    assert!(detail.contains("Price cannot be null"));
    assert!(!detail.contains("must be between"));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn update_without_id_is_rejected() {
    let (app, _) = memory_app();
    let (status, body) = send(&app, Method::PUT, BASE, Some(widget())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errorType"], "id is required");
}

#[tokio::test]
async fn malformed_body_is_client_error() {
    let (app, _) = memory_app();
    let (status, body) = send(&app, Method::POST, BASE, Some(json!({"name": "Widget", "quantity": "lots"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["statusMessage"], "Malformed request");
}

#[tokio::test]
async fn non_numeric_id_is_client_error() {
    let (app, _) = memory_app();
    let (status, body) = send(&app, Method::GET, &format!("{}/abc", BASE), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["statusMessage"], "Invalid id");
}

#[tokio::test]
async fn store_failures_map_to_internal_error_per_operation() {
    let app = app_with(Arc::new(BrokenStore));
    let existing = json!({"id": 1, "name": "Widget", "quantity": 5, "price": 9.99});
    let cases = [
        (Method::POST, BASE.to_string(), Some(widget()), "Error creating Item!"),
        (Method::PUT, BASE.to_string(), Some(existing.clone()), "Error updating item!"),
        (Method::DELETE, BASE.to_string(), Some(existing), "Error deleting item!"),
        (Method::GET, format!("{}/1", BASE), None, "Error getting item!"),
        (Method::GET, format!("{}/fetch-all", BASE), None, "Error getting items!"),
    ];
    for (method, uri, body, message) in cases {
        let (status, resp) = send(&app, method, &uri, body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", message);
        assert_eq!(resp["statusCode"], "INTERNAL_SERVER_ERROR");
        assert_eq!(resp["statusMessage"], message);
        assert_eq!(resp["errorType"], "connection refused");
        assert!(resp.get("result").is_none());
    }
}

#[tokio::test]
async fn health_and_readiness() {
    let (app, _) = memory_app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    let (status, _) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = send(&app, Method::GET, "/version", None).await;
    assert_eq!(body["name"], "inventory-service");
    assert!(body["version"].is_string());

    let broken = app_with(Arc::new(BrokenStore));
    let (status, body) = send(&broken, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["store"], "unavailable");
}

#[tokio::test]
async fn info_points_at_inventory_routes_and_docs() {
    let (app, _) = memory_app();
    let (status, body) = send(&app, Method::GET, "/info", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "inventory-service");
    assert_eq!(body["apiBasePath"], BASE);

    let docs = body["openapiPath"].as_str().unwrap();
    let (status, doc) = send(&app, Method::GET, docs, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"].get(BASE).is_some());
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (app, _) = memory_app();
    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/api/v1/inventory-management/fetch-all").is_some());
}

#[tokio::test]
async fn documented_collection_path_accepts_writes() {
    let (app, _) = memory_app();
    let (_, doc) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    let paths = doc["paths"].as_object().unwrap();
    let collection: Vec<&String> = paths.iter().filter(|(_, ops)| ops.get("post").is_some()).map(|(p, _)| p).collect();
    assert_eq!(collection.len(), 1);
    let path = collection[0].as_str();
    for op in ["put", "delete"] {
        assert!(paths[path].get(op).is_some(), "{} not documented on {}", op, path);
    }

    let (status, body) = send(&app, Method::POST, path, Some(widget())).await;
    assert_eq!(status, StatusCode::CREATED, "POST {}", path);
    let created = body["result"].clone();

    let (status, _) = send(&app, Method::PUT, path, Some(created.clone())).await;
    assert_eq!(status, StatusCode::OK, "PUT {}", path);
    let (status, _) = send(&app, Method::DELETE, path, Some(created)).await;
    assert_eq!(status, StatusCode::OK, "DELETE {}", path);

    let fetch_all = paths.keys().find(|p| p.ends_with("/fetch-all")).unwrap();
    let (status, _) = send(&app, Method::GET, fetch_all, None).await;
    assert_eq!(status, StatusCode::OK);
}
