//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /users`, `POST /auth/login`, `GET /health` - public
//! - everything else under `/auth`, `/users`, `/roles`, `/products` - Bearer token required
//!
//! # Middleware
//!
//! - **Tracing** - One span per request with status and latency
//! - **Authentication** - Bearer token, applied only to matched protected routes
//!
//! Trailing-slash normalization wraps this router in [`crate::server`].

use crate::api;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::{Router, middleware};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
pub fn app_router(state: AppState) -> Router {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .merge(api::routes::public_routes())
        .merge(protected)
        .with_state(state)
        .layer(tracing::layer())
}
