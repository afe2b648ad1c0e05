//! API route configuration.
//!
//! Public routes need no credentials. Protected routes are wrapped with
//! [`crate::api::middleware::auth`] by the top-level router.

use crate::api::handlers::{
    assign_role_handler, create_product_handler, create_role_handler, create_user_handler,
    delete_product_handler, delete_role_handler, delete_user_handler, get_product_by_name_handler,
    get_product_handler, get_role_handler, get_user_handler, health_handler, list_products_handler,
    list_roles_handler, list_users_handler, login_handler, me_handler, update_product_handler,
    update_role_handler, update_user_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes reachable without a bearer token.
///
/// # Endpoints
///
/// - `POST /users`       - Register a user
/// - `POST /auth/login`  - Exchange credentials for a token
/// - `GET  /health`      - Database and cache health
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user_handler))
        .route("/auth/login", post(login_handler))
        .route("/health", get(health_handler))
}

/// Routes requiring a bearer token.
///
/// # Endpoints
///
/// - `GET    /auth/me`                  - Current user
/// - `GET    /users`                    - List users (paginated)
/// - `GET    /users/{id}`               - Get a user
/// - `PUT    /users/{id}`               - Update a user
/// - `DELETE /users/{id}`               - Delete a user
/// - `POST   /users/{id}/roles`         - Grant a role
/// - `GET    /roles`, `POST /roles`     - List or create roles
/// - `GET    /roles/{id}`               - Get a role
/// - `PUT    /roles/{id}`               - Rename a role
/// - `DELETE /roles/{id}`               - Delete a role
/// - `GET    /products`, `POST /products` - List (paginated) or create products
/// - `GET    /products/{id}`            - Get a product
/// - `GET    /products/by-name/{name}`  - Get a product by name
/// - `PUT    /products/{id}`            - Update a product and its stock
/// - `DELETE /products/{id}`            - Delete a product and its stock
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/me", get(me_handler))
        .route("/users", get(list_users_handler))
        .route(
            "/users/{id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        .route("/users/{id}/roles", post(assign_role_handler))
        .route("/roles", get(list_roles_handler).post(create_role_handler))
        .route(
            "/roles/{id}",
            get(get_role_handler)
                .put(update_role_handler)
                .delete(delete_role_handler),
        )
        .route(
            "/products",
            get(list_products_handler).post(create_product_handler),
        )
        .route("/products/by-name/{name}", get(get_product_by_name_handler))
        .route(
            "/products/{id}",
            get(get_product_handler)
                .put(update_product_handler)
                .delete(delete_product_handler),
        )
}
