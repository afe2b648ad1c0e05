//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through `FromRow` structs.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - Users and role assignments
//! - [`PgRoleRepository`] - Roles
//! - [`PgProductRepository`] - Products with their stock rows

pub mod pg_product_repository;
pub mod pg_role_repository;
pub mod pg_user_repository;

pub use pg_product_repository::PgProductRepository;
pub use pg_role_repository::PgRoleRepository;
pub use pg_user_repository::PgUserRepository;
