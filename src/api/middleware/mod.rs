//! HTTP middleware and extractors.
//!
//! Provides bearer authentication, request tracing, and extractors that
//! reject with the standard error envelope.

pub mod auth;
pub mod extract;
pub mod tracing;
pub mod validate;

pub use extract::{Path, Query};
pub use validate::ValidatedJson;
