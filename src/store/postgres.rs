//! PostgreSQL-backed item store. Table DDL lives in [`crate::migration`].

use super::ItemStore;
use crate::error::{AppError, ConfigError, StoreError};
use crate::item::Item;
use crate::migration::{qualified_item_table, quote};
use async_trait::async_trait;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

const ITEM_COLUMNS: &str = "id, name, description, quantity, price, created_at, updated_at";

#[derive(Clone)]
pub struct PgItemStore {
    pool: PgPool,
    table: String,
}

impl PgItemStore {
    pub fn new(pool: PgPool, schema: &str) -> Self {
        Self {
            pool,
            table: qualified_item_table(schema),
        }
    }

    async fn insert(&self, item: &Item) -> Result<Item, StoreError> {
        let sql = format!(
            "INSERT INTO {} (name, description, quantity, price, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, NOW(), NOW()) RETURNING {}",
            self.table, ITEM_COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Item>(&sql)
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.quantity)
            .bind(item.price)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: i64, item: &Item) -> Result<Option<Item>, StoreError> {
        let sql = format!(
            "UPDATE {} SET name = $2, description = $3, quantity = $4, price = $5, updated_at = NOW() \
             WHERE id = $1 RETURNING {}",
            self.table, ITEM_COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Item>(&sql)
            .bind(id)
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.quantity)
            .bind(item.price)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn upsert(&self, item: Item) -> Result<Item, StoreError> {
        match item.id {
            None => self.insert(&item).await,
            Some(id) => match self.update(id, &item).await? {
                Some(row) => Ok(row),
                None => {
                    tracing::debug!(id, "no row to update; inserting");
                    self.insert(&item).await
                }
            },
        }
    }

    async fn delete(&self, item: &Item) -> Result<(), StoreError> {
        let Some(id) = item.id else {
            return Ok(());
        };
        let sql = format!("DELETE FROM {} WHERE id = $1", self.table);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, StoreError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", ITEM_COLUMNS, self.table);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Item>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<Item>, StoreError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", ITEM_COLUMNS, self.table);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Item>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url).map_err(|e| {
        tracing::error!(error = %e, "cannot parse DATABASE_URL");
        invalid_url(database_url)
    })?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn invalid_url(url: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: "DATABASE_URL",
        value: url.to_string(),
    }
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), ConfigError> {
    let path_start = url.rfind('/').ok_or_else(|| invalid_url(url))? + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    Ok((format!("{}postgres", base), db_name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_database_name() {
        let (admin, name) = parse_db_name_from_url("postgres://u:p@localhost:5432/inventory?sslmode=disable").unwrap();
        assert_eq!(admin, "postgres://u:p@localhost:5432/postgres");
        assert_eq!(name, "inventory");
    }

    #[test]
    fn url_without_path_is_rejected() {
        let err = parse_db_name_from_url("inventory").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { key: "DATABASE_URL", ref value } if value == "inventory"
        ));
    }

    #[tokio::test]
    async fn unparseable_url_is_a_config_error() {
        let err = ensure_database_exists("not a url/inventory").await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::InvalidValue { key: "DATABASE_URL", .. })
        ));
        assert!(err.to_string().contains("DATABASE_URL"));
    }
}
