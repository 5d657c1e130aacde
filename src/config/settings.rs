//! Process settings read from the environment (after `.env` is loaded by the binary).

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/inventory";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_SCHEMA: &str = "public";
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Which [`ItemStore`](crate::store::ItemStore) backs the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    /// Non-persistent; data is lost on restart.
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(ConfigError::UnknownBackend(other.to_string())),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    /// Schema holding the item table. From `INVENTORY_SCHEMA`.
    pub schema: String,
    pub body_limit_bytes: usize,
    pub store_backend: StoreBackend,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; unset keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Ok(Settings {
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            bind_addr: parse_or("BIND_ADDR", get("BIND_ADDR"), || {
                SocketAddr::from(([0, 0, 0, 0], 8080))
            })?,
            max_connections: parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), || DEFAULT_MAX_CONNECTIONS)?,
            schema: get("INVENTORY_SCHEMA").unwrap_or_else(|| DEFAULT_SCHEMA.into()),
            body_limit_bytes: parse_or("BODY_LIMIT_BYTES", get("BODY_LIMIT_BYTES"), || DEFAULT_BODY_LIMIT_BYTES)?,
            store_backend: match get("STORE_BACKEND") {
                Some(v) => v.parse()?,
                None => StoreBackend::Postgres,
            },
        })
    }
}

fn parse_or<T: FromStr>(
    key: &'static str,
    value: Option<String>,
    default: impl FnOnce() -> T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default()),
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: v }),
    }
}
