//! Handlers for login and the current-user endpoint.

use axum::{Extension, Json, extract::State};

use crate::api::dto::auth::{LoginRequest, LoginResponse};
use crate::api::middleware::ValidatedJson;
use crate::api::presenters::{UserView, present_user};
use crate::application::services::Claims;
use crate::error::AppError;
use crate::state::AppState;

/// Exchanges credentials for a bearer token.
///
/// # Endpoint
///
/// `POST /auth/login` (public)
///
/// # Errors
///
/// Returns 401 for an unknown email or a wrong password.
pub async fn login_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let issued = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(LoginResponse {
        access_token: issued.access_token,
        token_type: "Bearer",
        expires_in: issued.expires_in,
    }))
}

/// Returns the user the bearer token was issued to.
///
/// # Endpoint
///
/// `GET /auth/me`
pub async fn me_handler(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<UserView>, AppError> {
    let user = state.user_service.get_user(claims.user_id()?).await?;
    Ok(Json(present_user(&user)))
}
