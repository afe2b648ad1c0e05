//! Product entity and its one-to-one stock record.

use chrono::{DateTime, Utc};

/// Inventory record for a product. `quantity` is never negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Stock {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A catalogue product.
///
/// `price` is expressed in minor currency units (cents).
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub stock: Stock,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates a new Product instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        name: String,
        description: Option<String>,
        price: i64,
        stock: Stock,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            stock,
            created_at,
            updated_at,
        }
    }
}

/// Input data for creating a product together with its stock row.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub quantity: i32,
}

/// Partial update for a product and its stock.
///
/// `description: Some(None)` clears the description; `None` leaves it as is.
#[derive(Debug, Clone, Default)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub price: Option<i64>,
    pub quantity: Option<i32>,
}
