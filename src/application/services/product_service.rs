//! Product catalogue service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{NewProduct, Product, UpdateProduct};
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;

/// Service for products and their stock.
///
/// Creating a product always creates its stock row; the repository writes
/// both in one transaction so a failed stock insert leaves no product behind.
pub struct ProductService<P: ProductRepository + ?Sized> {
    repository: Arc<P>,
}

impl<P: ProductRepository + ?Sized> ProductService<P> {
    pub fn new(repository: Arc<P>) -> Self {
        Self { repository }
    }

    /// Creates a product with its initial stock quantity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if price or quantity is negative.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_product(&self, new_product: NewProduct) -> Result<Product, AppError> {
        ensure_non_negative("price", new_product.price)?;
        ensure_non_negative("quantity", i64::from(new_product.quantity))?;

        let product = self.repository.create(new_product).await?;
        tracing::info!(
            product_id = product.id,
            quantity = product.stock.quantity,
            "Product created"
        );
        Ok(product)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no product has this ID.
    pub async fn get_product(&self, id: i64) -> Result<Product, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| product_not_found(json!({ "id": id })))
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no product has this name.
    pub async fn find_product_by_name(&self, name: &str) -> Result<Product, AppError> {
        self.repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| product_not_found(json!({ "name": name })))
    }

    /// Returns one page of products together with the total count.
    pub async fn list_products(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Product>, i64), AppError> {
        let products = self.repository.list(offset, limit).await?;
        let total = self.repository.count().await?;
        Ok((products, total))
    }

    /// Partially updates a product and its stock.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if price or quantity is negative.
    /// Returns [`AppError::NotFound`] if the product does not exist.
    pub async fn update_product(
        &self,
        id: i64,
        update: UpdateProduct,
    ) -> Result<Product, AppError> {
        if let Some(price) = update.price {
            ensure_non_negative("price", price)?;
        }
        if let Some(quantity) = update.quantity {
            ensure_non_negative("quantity", i64::from(quantity))?;
        }

        self.repository.update(id, update).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the product does not exist.
    pub async fn delete_product(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(product_not_found(json!({ "id": id })));
        }

        tracing::info!(product_id = id, "Product deleted");
        Ok(())
    }
}

fn ensure_non_negative(field: &str, value: i64) -> Result<(), AppError> {
    if value < 0 {
        return Err(AppError::bad_request(
            "Value must not be negative",
            json!({ "field": field, "value": value }),
        ));
    }
    Ok(())
}

fn product_not_found(details: serde_json::Value) -> AppError {
    AppError::not_found("Product not found", details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Stock;
    use crate::domain::repositories::MockProductRepository;
    use chrono::Utc;

    fn create_test_product(id: i64, name: &str, price: i64, quantity: i32) -> Product {
        let now = Utc::now();
        Product::new(
            id,
            name.to_string(),
            None,
            price,
            Stock {
                id: id + 100,
                product_id: id,
                quantity,
                created_at: now,
                updated_at: now,
            },
            now,
            now,
        )
    }

    #[tokio::test]
    async fn test_create_product_with_stock() {
        let mut mock_repo = MockProductRepository::new();

        mock_repo
            .expect_create()
            .withf(|p| p.name == "Keyboard" && p.quantity == 25)
            .times(1)
            .returning(|p| Ok(create_test_product(1, &p.name, p.price, p.quantity)));

        let service = ProductService::new(Arc::new(mock_repo));

        let product = service
            .create_product(NewProduct {
                name: "Keyboard".to_string(),
                description: None,
                price: 4_999,
                quantity: 25,
            })
            .await
            .unwrap();

        assert_eq!(product.stock.quantity, 25);
        assert_eq!(product.stock.product_id, product.id);
    }

    #[tokio::test]
    async fn test_create_product_negative_quantity_rejected() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_create().times(0);

        let service = ProductService::new(Arc::new(mock_repo));

        let result = service
            .create_product(NewProduct {
                name: "Keyboard".to_string(),
                description: None,
                price: 100,
                quantity: -1,
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_product_negative_price_rejected() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_update().times(0);

        let service = ProductService::new(Arc::new(mock_repo));

        let result = service
            .update_product(
                1,
                UpdateProduct {
                    price: Some(-5),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_list_products_returns_total() {
        let mut mock_repo = MockProductRepository::new();

        mock_repo
            .expect_list()
            .withf(|offset, limit| *offset == 20 && *limit == 20)
            .times(1)
            .returning(|_, _| Ok(vec![create_test_product(21, "Mouse", 1_500, 3)]));
        mock_repo.expect_count().times(1).returning(|| Ok(21));

        let service = ProductService::new(Arc::new(mock_repo));

        let (items, total) = service.list_products(20, 20).await.unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(total, 21);
    }

    #[tokio::test]
    async fn test_find_product_by_name_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_by_name()
            .times(1)
            .returning(|_| Ok(None));

        let service = ProductService::new(Arc::new(mock_repo));

        let result = service.find_product_by_name("Nothing").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
