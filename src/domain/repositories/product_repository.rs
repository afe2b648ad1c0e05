//! Repository trait for products and their stock.

use crate::domain::entities::{NewProduct, Product, UpdateProduct};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for products.
///
/// A product and its stock row are always written together; implementations
/// must make `create` and `update` atomic across both rows.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgProductRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Creates a product and its stock row in a single transaction.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors; nothing is persisted.
    async fn create(&self, new_product: NewProduct) -> Result<Product, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError>;

    /// Finds the first product (lowest ID) with exactly this name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, AppError>;

    /// Applies a partial update to the product and its stock atomically.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the product does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, update: UpdateProduct) -> Result<Product, AppError>;

    /// Lists products ordered by ID.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Product>, AppError>;

    async fn count(&self) -> Result<i64, AppError>;

    /// Deletes a product and its stock. Returns `Ok(false)` if it did not exist.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
