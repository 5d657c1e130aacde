//! Apply the item table DDL. Idempotent: schema and table use IF NOT EXISTS.

use crate::error::AppError;
use sqlx::PgPool;

pub const ITEM_TABLE: &str = "item";

pub fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Schema-qualified, quoted item table name (e.g. `"public"."item"`).
pub fn qualified_item_table(schema: &str) -> String {
    format!("{}.{}", quote(schema), quote(ITEM_TABLE))
}

pub fn item_table_ddl(schema: &str) -> String {
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            description VARCHAR(500),
            quantity INTEGER NOT NULL,
            price NUMERIC(12, 2) NOT NULL,
            created_at TIMESTAMP NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP NOT NULL DEFAULT NOW()
        )
        "#,
        qualified_item_table(schema)
    )
}

/// Create `schema` if missing, then the item table.
pub async fn apply_migrations(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quote(schema)))
        .execute(pool)
        .await?;
    sqlx::query(&item_table_ddl(schema)).execute(pool).await?;
    tracing::info!(schema = %schema, table = ITEM_TABLE, "item table ready");
    Ok(())
}
