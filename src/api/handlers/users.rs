//! Handlers for user endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::pagination::{PaginatedResponse, PaginationParams};
use crate::api::dto::user::{AssignRoleRequest, CreateUserRequest, UpdateUserRequest};
use crate::api::middleware::{Path, Query, ValidatedJson};
use crate::api::presenters::{UserView, present_user};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new user.
///
/// # Endpoint
///
/// `POST /users` (public)
///
/// # Errors
///
/// Returns 400 if the body is malformed or fails validation.
/// Returns 409 if the email is already registered.
pub async fn create_user_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserView>), AppError> {
    let user = state
        .user_service
        .create_user(payload.name, payload.email, &payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(present_user(&user))))
}

/// Lists users page by page.
///
/// # Endpoint
///
/// `GET /users?page=1&page_size=20`
pub async fn list_users_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedResponse<UserView>>, AppError> {
    let page = params.resolve()?;
    let (users, total) = state
        .user_service
        .list_users(page.offset(), page.limit())
        .await?;

    Ok(Json(PaginatedResponse::new(
        users.iter().map(present_user).collect(),
        page,
        total,
    )))
}

/// # Endpoint
///
/// `GET /users/{id}`
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UserView>, AppError> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(present_user(&user)))
}

/// Partially updates a user.
///
/// # Endpoint
///
/// `PUT /users/{id}`
///
/// # Errors
///
/// Returns 404 if the user does not exist.
/// Returns 409 if the new email belongs to another user.
pub async fn update_user_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<UserView>, AppError> {
    let user = state
        .user_service
        .update_user(
            id,
            payload.name,
            payload.email,
            payload.password.as_deref(),
        )
        .await?;

    Ok(Json(present_user(&user)))
}

/// # Endpoint
///
/// `DELETE /users/{id}`
pub async fn delete_user_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.user_service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Grants a role to a user. Granting a role the user already has is a no-op.
///
/// # Endpoint
///
/// `POST /users/{id}/roles`
///
/// # Errors
///
/// Returns 404 if the user or the role does not exist.
pub async fn assign_role_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<AssignRoleRequest>,
) -> Result<Json<UserView>, AppError> {
    let user = state.user_service.assign_role(id, &payload.role).await?;
    Ok(Json(present_user(&user)))
}
