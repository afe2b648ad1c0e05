//! Helpers shared across layers.
//!
//! - [`db_error`] - PostgreSQL error inspection
//! - [`password`] - bcrypt password hashing

pub mod db_error;
pub mod password;
