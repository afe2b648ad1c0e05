//! DTOs for role endpoints.
//!
//! Only the length is checked here; the naming pattern is enforced by
//! [`RoleService`](crate::application::services::RoleService).

use serde::Deserialize;
use validator::Validate;

/// Request body for `POST /roles`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRoleRequest {
    #[validate(length(min = 2, max = 50))]
    pub name: String,
}

/// Request body for `PUT /roles/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRoleRequest {
    #[validate(length(min = 2, max = 50))]
    pub name: Option<String>,
}
