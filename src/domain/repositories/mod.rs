//! Repository trait definitions for the domain layer.
//!
//! Traits define the persistence contract; PostgreSQL implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! with `mockall` for unit tests.
//!
//! - [`UserRepository`] - Users and their role assignments
//! - [`RoleRepository`] - Roles
//! - [`ProductRepository`] - Products with their stock rows

pub mod product_repository;
pub mod role_repository;
pub mod user_repository;

pub use product_repository::ProductRepository;
pub use role_repository::RoleRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use product_repository::MockProductRepository;
#[cfg(test)]
pub use role_repository::MockRoleRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
