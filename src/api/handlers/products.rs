//! Handlers for product endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::pagination::{PaginatedResponse, PaginationParams};
use crate::api::dto::product::{CreateProductRequest, UpdateProductRequest};
use crate::api::middleware::{Path, Query, ValidatedJson};
use crate::api::presenters::{ProductView, present_product};
use crate::domain::entities::{NewProduct, UpdateProduct};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a product together with its stock row.
///
/// # Endpoint
///
/// `POST /products`
///
/// # Request Body
///
/// ```json
/// {"name": "Keyboard", "description": "Mechanical", "price": 4999, "quantity": 25}
/// ```
///
/// # Errors
///
/// Returns 400 if price or quantity is negative.
pub async fn create_product_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductView>), AppError> {
    let product = state
        .product_service
        .create_product(NewProduct {
            name: payload.name,
            description: payload.description,
            price: payload.price,
            quantity: payload.quantity,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(present_product(&product))))
}

/// # Endpoint
///
/// `GET /products?page=1&page_size=20`
pub async fn list_products_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedResponse<ProductView>>, AppError> {
    let page = params.resolve()?;
    let (products, total) = state
        .product_service
        .list_products(page.offset(), page.limit())
        .await?;

    Ok(Json(PaginatedResponse::new(
        products.iter().map(present_product).collect(),
        page,
        total,
    )))
}

pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProductView>, AppError> {
    let product = state.product_service.get_product(id).await?;
    Ok(Json(present_product(&product)))
}

/// Looks a product up by exact name; the lowest ID wins on duplicates.
///
/// # Endpoint
///
/// `GET /products/by-name/{name}`
pub async fn get_product_by_name_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ProductView>, AppError> {
    let product = state.product_service.find_product_by_name(&name).await?;
    Ok(Json(present_product(&product)))
}

/// Partially updates a product and its stock.
///
/// # Endpoint
///
/// `PUT /products/{id}`
///
/// `description: null` clears the description.
pub async fn update_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<UpdateProductRequest>,
) -> Result<Json<ProductView>, AppError> {
    let update = UpdateProduct {
        name: payload.name,
        description: payload.description,
        price: payload.price,
        quantity: payload.quantity,
    };

    let product = state.product_service.update_product(id, update).await?;
    Ok(Json(present_product(&product)))
}

pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.product_service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
