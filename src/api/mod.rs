//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Request bodies, query parameters and response envelopes
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication, tracing and extractors
//! - [`presenters`] - Entity to response mapping
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod presenters;
pub mod routes;
