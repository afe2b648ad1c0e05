//! Domain layer: business entities and repository contracts.
//!
//! This layer has no dependencies on infrastructure or presentation code.
//! Repository traits are implemented in [`crate::infrastructure::persistence`]
//! and consumed by [`crate::application::services`].
//!
//! - [`entities`] - Core business records
//! - [`repositories`] - Data access trait definitions

pub mod entities;
pub mod repositories;
