//! Repository trait for roles.

use crate::domain::entities::{NewRole, Role, UpdateRole};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for roles.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRoleRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Creates a new role.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_role: NewRole) -> Result<Role, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Role>, AppError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, AppError>;

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the role does not exist.
    /// Returns [`AppError::Conflict`] if the new name is taken.
    async fn update(&self, id: i64, update: UpdateRole) -> Result<Role, AppError>;

    /// Lists all roles ordered by name.
    async fn list(&self) -> Result<Vec<Role>, AppError>;

    /// Deletes a role. Returns `Ok(false)` if it did not exist.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
