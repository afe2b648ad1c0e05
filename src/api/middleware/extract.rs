//! Path and query extractors that reject with [`AppError`].

use axum::extract::FromRequestParts;

use crate::error::AppError;

/// [`axum::extract::Path`] with the standard error envelope on rejection.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);

/// [`axum::extract::Query`] with the standard error envelope on rejection.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct Query<T>(pub T);
