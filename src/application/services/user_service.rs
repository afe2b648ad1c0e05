//! User registration, maintenance and role assignment.

use std::sync::Arc;

use crate::domain::entities::{NewUser, UpdateUser, User};
use crate::domain::repositories::{RoleRepository, UserRepository};
use crate::error::AppError;
use crate::utils::password::PasswordHasher;
use serde_json::json;

/// Service orchestrating user operations.
///
/// Plaintext passwords enter here and leave as bcrypt hashes; repositories
/// never see them.
pub struct UserService<U: UserRepository + ?Sized, R: RoleRepository + ?Sized> {
    user_repository: Arc<U>,
    role_repository: Arc<R>,
    hasher: PasswordHasher,
}

impl<U: UserRepository + ?Sized, R: RoleRepository + ?Sized> UserService<U, R> {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<U>, role_repository: Arc<R>, hasher: PasswordHasher) -> Self {
        Self {
            user_repository,
            role_repository,
            hasher,
        }
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Internal`] on hashing or database errors.
    pub async fn create_user(
        &self,
        name: String,
        email: String,
        password: &str,
    ) -> Result<User, AppError> {
        if self.user_repository.find_by_email(&email).await?.is_some() {
            return Err(email_taken(&email));
        }

        let password_hash = self.hasher.hash(password).await?;

        let user = self
            .user_repository
            .create(NewUser {
                name,
                email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    /// Retrieves a user by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this ID.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this email.
    pub async fn get_user_by_email(&self, email: &str) -> Result<User, AppError> {
        self.user_repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({ "email": email })))
    }

    /// Returns one page of users together with the total count.
    pub async fn list_users(&self, offset: i64, limit: i64) -> Result<(Vec<User>, i64), AppError> {
        let users = self.user_repository.list(offset, limit).await?;
        let total = self.user_repository.count().await?;
        Ok((users, total))
    }

    /// Counts registered users.
    pub async fn count_users(&self) -> Result<i64, AppError> {
        self.user_repository.count().await
    }

    /// Partially updates a user. A new password is re-hashed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Conflict`] if the new email belongs to another user.
    pub async fn update_user(
        &self,
        id: i64,
        name: Option<String>,
        email: Option<String>,
        password: Option<&str>,
    ) -> Result<User, AppError> {
        let current = self.get_user(id).await?;

        if let Some(ref new_email) = email
            && *new_email != current.email
            && let Some(owner) = self.user_repository.find_by_email(new_email).await?
            && owner.id != id
        {
            return Err(email_taken(new_email));
        }

        let password_hash = match password {
            Some(p) => Some(self.hasher.hash(p).await?),
            None => None,
        };

        self.user_repository
            .update(
                id,
                UpdateUser {
                    name,
                    email,
                    password_hash,
                },
            )
            .await
    }

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        if !self.user_repository.delete(id).await? {
            return Err(user_not_found(id));
        }

        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }

    /// Assigns the role named `role_name` to a user.
    ///
    /// Assigning a role the user already has returns the user unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if either the user or the role does not exist.
    pub async fn assign_role(&self, user_id: i64, role_name: &str) -> Result<User, AppError> {
        let user = self.get_user(user_id).await?;

        if user.has_role(role_name) {
            return Ok(user);
        }

        let role = self
            .role_repository
            .find_by_name(role_name)
            .await?
            .ok_or_else(|| AppError::not_found("Role not found", json!({ "name": role_name })))?;

        self.user_repository.assign_role(user.id, role.id).await?;
        tracing::info!(user_id, role = %role.name, "Role assigned");

        self.get_user(user_id).await
    }
}

fn user_not_found(id: i64) -> AppError {
    AppError::not_found("User not found", json!({ "id": id }))
}

fn email_taken(email: &str) -> AppError {
    AppError::conflict("Email already registered", json!({ "email": email }))
}
