//! Role management service.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde_json::json;

use crate::domain::entities::{NewRole, Role, UpdateRole};
use crate::domain::repositories::RoleRepository;
use crate::error::AppError;

static ROLE_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_-]*$").unwrap());

/// Service for creating and maintaining roles.
///
/// Role names are lowercase identifiers: 2-50 characters, starting with a
/// letter, then letters, digits, `_` or `-`.
pub struct RoleService<R: RoleRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: RoleRepository + ?Sized> RoleService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a new role.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is malformed.
    /// Returns [`AppError::Conflict`] if the name is taken.
    pub async fn create_role(&self, name: String) -> Result<Role, AppError> {
        validate_role_name(&name)?;

        if self.repository.find_by_name(&name).await?.is_some() {
            return Err(name_taken(&name));
        }

        let role = self.repository.create(NewRole { name }).await?;
        tracing::info!(role_id = role.id, role = %role.name, "Role created");
        Ok(role)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no role has this ID.
    pub async fn get_role(&self, id: i64) -> Result<Role, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| role_not_found(id))
    }

    pub async fn list_roles(&self) -> Result<Vec<Role>, AppError> {
        self.repository.list().await
    }

    /// Renames a role.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the new name is malformed.
    /// Returns [`AppError::NotFound`] if the role does not exist.
    /// Returns [`AppError::Conflict`] if another role already uses the name.
    pub async fn update_role(&self, id: i64, name: Option<String>) -> Result<Role, AppError> {
        if let Some(ref new_name) = name {
            validate_role_name(new_name)?;

            if let Some(existing) = self.repository.find_by_name(new_name).await?
                && existing.id != id
            {
                return Err(name_taken(new_name));
            }
        }

        self.repository.update(id, UpdateRole { name }).await
    }

    /// Deletes a role; users holding it lose the assignment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the role does not exist.
    pub async fn delete_role(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(role_not_found(id));
        }

        tracing::info!(role_id = id, "Role deleted");
        Ok(())
    }
}

fn validate_role_name(name: &str) -> Result<(), AppError> {
    if !(2..=50).contains(&name.len()) || !ROLE_NAME_REGEX.is_match(name) {
        return Err(AppError::bad_request(
            "Invalid role name",
            json!({
                "name": name,
                "reason": "2-50 characters: lowercase letter first, then a-z, 0-9, '_' or '-'"
            }),
        ));
    }

    Ok(())
}

fn role_not_found(id: i64) -> AppError {
    AppError::not_found("Role not found", json!({ "id": id }))
}

fn name_taken(name: &str) -> AppError {
    AppError::conflict("Role already exists", json!({ "name": name }))
}
