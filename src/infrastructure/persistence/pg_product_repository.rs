//! PostgreSQL implementation of product repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool, Postgres};

use crate::domain::entities::{NewProduct, Product, Stock, UpdateProduct};
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;

const SELECT_PRODUCT: &str = r#"
    SELECT
        p.id, p.name, p.description, p.price, p.created_at, p.updated_at,
        s.id AS stock_id,
        s.quantity,
        s.created_at AS stock_created_at,
        s.updated_at AS stock_updated_at
    FROM products p
    JOIN stocks s ON s.product_id = p.id
"#;

#[derive(FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: Option<String>,
    price: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    stock_id: i64,
    quantity: i32,
    stock_created_at: DateTime<Utc>,
    stock_updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(r: ProductRow) -> Self {
        let stock = Stock {
            id: r.stock_id,
            product_id: r.id,
            quantity: r.quantity,
            created_at: r.stock_created_at,
            updated_at: r.stock_updated_at,
        };
        Product::new(
            r.id,
            r.name,
            r.description,
            r.price,
            stock,
            r.created_at,
            r.updated_at,
        )
    }
}

/// PostgreSQL repository for products.
///
/// Every product row has exactly one `stocks` row; reads join the two.
pub struct PgProductRepository {
    pool: Arc<PgPool>,
}

impl PgProductRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

async fn fetch_by_id<'e, E>(executor: E, id: i64) -> Result<Option<ProductRow>, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Postgres>,
{
    let sql = format!("{SELECT_PRODUCT} WHERE p.id = $1");
    sqlx::query_as::<_, ProductRow>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, new_product: NewProduct) -> Result<Product, AppError> {
        let mut tx = self.pool.begin().await?;

        let product_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO products (name, description, price)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&new_product.name)
        .bind(&new_product.description)
        .bind(new_product.price)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO stocks (product_id, quantity) VALUES ($1, $2)")
            .bind(product_id)
            .bind(new_product.quantity)
            .execute(&mut *tx)
            .await?;

        let row = fetch_by_id(&mut *tx, product_id)
            .await?
            .ok_or_else(|| AppError::internal("Created product vanished", json!({})))?;

        tx.commit().await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let row = fetch_by_id(self.pool.as_ref(), id).await?;
        Ok(row.map(Product::from))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, AppError> {
        let sql = format!("{SELECT_PRODUCT} WHERE p.name = $1 ORDER BY p.id LIMIT 1");
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(name)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Product::from))
    }

    async fn update(&self, id: i64, update: UpdateProduct) -> Result<Product, AppError> {
        let mut tx = self.pool.begin().await?;

        let (description_set, description) = match update.description {
            Some(value) => (true, value),
            None => (false, None),
        };

        let updated = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE products SET
                name        = COALESCE($2, name),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                price       = COALESCE($5, price),
                updated_at  = NOW()
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(update.name)
        .bind(description_set)
        .bind(description)
        .bind(update.price)
        .fetch_optional(&mut *tx)
        .await?;

        if updated.is_none() {
            return Err(AppError::not_found("Product not found", json!({ "id": id })));
        }

        if let Some(quantity) = update.quantity {
            sqlx::query("UPDATE stocks SET quantity = $2, updated_at = NOW() WHERE product_id = $1")
                .bind(id)
                .bind(quantity)
                .execute(&mut *tx)
                .await?;
        }

        let row = fetch_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found", json!({ "id": id })))?;

        tx.commit().await?;

        Ok(row.into())
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Product>, AppError> {
        let sql = format!("{SELECT_PRODUCT} ORDER BY p.id OFFSET $1 LIMIT $2");
        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(offset)
            .bind(limit)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
