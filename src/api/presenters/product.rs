use serde::{Deserialize, Serialize};

use super::format_timestamp;
use crate::domain::entities::Product;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockView {
    pub quantity: i32,
    pub updated_at: String,
}

/// Public view of a product with its stock level.
///
/// `description` is always present, `null` when unset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductView {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub stock: StockView,
    pub created_at: String,
    pub updated_at: String,
}

pub fn present_product(product: &Product) -> ProductView {
    ProductView {
        id: product.id,
        name: product.name.clone(),
        description: product.description.clone(),
        price: product.price,
        stock: StockView {
            quantity: product.stock.quantity,
            updated_at: format_timestamp(&product.stock.updated_at),
        },
        created_at: format_timestamp(&product.created_at),
        updated_at: format_timestamp(&product.updated_at),
    }
}
