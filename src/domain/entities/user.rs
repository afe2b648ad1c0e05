//! User entity.

use chrono::{DateTime, Utc};

use super::role::Role;

/// A registered user.
///
/// `password_hash` holds a bcrypt hash and must never leave the service;
/// presenters drop it.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub roles: Vec<Role>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        name: String,
        email: String,
        password_hash: String,
        roles: Vec<Role>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
            roles,
            created_at,
            updated_at,
        }
    }

    /// Returns true if the user has been assigned the role `name`.
    pub fn has_role(&self, name: &str) -> bool {
        self.roles.iter().any(|r| r.name == name)
    }
}

/// Input data for creating a user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Partial update for a user.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}
