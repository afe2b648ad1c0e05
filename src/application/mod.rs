//! Application layer services implementing business logic.
//!
//! Each service orchestrates the repository calls for one aggregate and is
//! the only layer handlers talk to. Services are generic over repository
//! traits, so the same code runs against PostgreSQL, mocks or in-memory
//! stores.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - Registration, updates, role assignment
//! - [`services::role_service::RoleService`] - Role management
//! - [`services::product_service::ProductService`] - Products with stock
//! - [`services::auth_service::AuthService`] - Login and bearer token verification

pub mod services;
