//! Handlers for role endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::role::{CreateRoleRequest, UpdateRoleRequest};
use crate::api::middleware::{Path, ValidatedJson};
use crate::api::presenters::{RoleView, present_role};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a role.
///
/// # Endpoint
///
/// `POST /roles`
///
/// # Errors
///
/// Returns 400 if the name is not a lowercase identifier.
/// Returns 409 if the role already exists.
pub async fn create_role_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateRoleRequest>,
) -> Result<(StatusCode, Json<RoleView>), AppError> {
    let role = state.role_service.create_role(payload.name).await?;
    Ok((StatusCode::CREATED, Json(present_role(&role))))
}

/// Lists all roles ordered by name.
pub async fn list_roles_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<RoleView>>, AppError> {
    let roles = state.role_service.list_roles().await?;
    Ok(Json(roles.iter().map(present_role).collect()))
}

pub async fn get_role_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RoleView>, AppError> {
    let role = state.role_service.get_role(id).await?;
    Ok(Json(present_role(&role)))
}

pub async fn update_role_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<UpdateRoleRequest>,
) -> Result<Json<RoleView>, AppError> {
    let role = state.role_service.update_role(id, payload.name).await?;
    Ok(Json(present_role(&role)))
}

/// Deletes a role; users holding it lose the assignment.
pub async fn delete_role_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.role_service.delete_role(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
