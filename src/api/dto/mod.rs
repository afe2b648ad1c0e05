//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs carry `validator` rules and are extracted with
//! [`ValidatedJson`](crate::api::middleware::ValidatedJson).

pub mod auth;
pub mod health;
pub mod pagination;
pub mod product;
pub mod role;
pub mod user;
