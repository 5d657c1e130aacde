//! Inventory server: loads settings from env / `.env`, prepares the store, serves the router.
//!
//! Run from repo root: `cargo run -p inventory-server`
//! Without a database: `STORE_BACKEND=memory cargo run -p inventory-server`

use inventory_service::{
    apply_migrations, build_app, ensure_database_exists, AppState, ItemStore, MemoryItemStore, PgItemStore,
    Settings, StoreBackend,
};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("inventory_service=info,inventory_server=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let store: Arc<dyn ItemStore> = match settings.store_backend {
        StoreBackend::Postgres => {
            ensure_database_exists(&settings.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(settings.max_connections)
                .connect(&settings.database_url)
                .await?;
            apply_migrations(&pool, &settings.schema).await?;
            Arc::new(PgItemStore::new(pool, &settings.schema))
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory store; items are not persisted");
            Arc::new(MemoryItemStore::new())
        }
    };

    let app = build_app(AppState::new(store), settings.body_limit_bytes);
    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("inventory server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
