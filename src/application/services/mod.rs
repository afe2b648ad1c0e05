//! Business logic services for the application layer.

pub mod auth_service;
pub mod product_service;
pub mod role_service;
pub mod user_service;

pub use auth_service::{AuthService, Claims, IssuedToken};
pub use product_service::ProductService;
pub use role_service::RoleService;
pub use user_service::UserService;
