//! The inventory record persisted in the `item` table.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `name` and `price` are optional on the wire so a missing value surfaces as a
/// field violation rather than a decode failure; both are NOT NULL in the table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Assigned by the store on first insert.
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub quantity: i32,
    /// JSON number with up to two decimal places.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>, example = 9.99)]
    pub price: Option<Decimal>,
    /// Stamped by the store; ignored on input.
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Item {
    /// A not-yet-persisted item with no id or timestamps.
    pub fn new(name: impl Into<String>, quantity: i32, price: Decimal) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            description: None,
            quantity,
            price: Some(price),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}
