//! Shared application state passed to every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, ProductService, RoleService, UserService};
use crate::domain::repositories::{ProductRepository, RoleRepository, UserRepository};
use crate::infrastructure::cache::CacheService;

/// Application state holding the services behind the HTTP layer.
///
/// Services are stored over trait objects so the same router can run on
/// PostgreSQL repositories in production and in-memory ones in tests.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<dyn UserRepository, dyn RoleRepository>>,
    pub role_service: Arc<RoleService<dyn RoleRepository>>,
    pub product_service: Arc<ProductService<dyn ProductRepository>>,
    pub auth_service: Arc<AuthService<dyn UserRepository>>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    pub fn new(
        user_service: Arc<UserService<dyn UserRepository, dyn RoleRepository>>,
        role_service: Arc<RoleService<dyn RoleRepository>>,
        product_service: Arc<ProductService<dyn ProductRepository>>,
        auth_service: Arc<AuthService<dyn UserRepository>>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        Self {
            user_service,
            role_service,
            product_service,
            auth_service,
            cache,
        }
    }
}
