//! Core domain entities.
//!
//! Entities are plain records. Each has separate input structs for creation
//! (`NewUser`, `NewRole`, `NewProduct`) and partial updates (`UpdateUser`,
//! `UpdateRole`, `UpdateProduct`).
//!
//! - [`User`] - An account with a hashed password and assigned roles
//! - [`Role`] - A named permission group
//! - [`Product`] - A catalogue item with its [`Stock`] record

pub mod product;
pub mod role;
pub mod user;

pub use product::{NewProduct, Product, Stock, UpdateProduct};
pub use role::{NewRole, Role, UpdateRole};
pub use user::{NewUser, UpdateUser, User};
