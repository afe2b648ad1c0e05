//! Role entity.

use chrono::{DateTime, Utc};

/// A named role that can be assigned to many users.
#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Role {
    pub fn new(id: i64, name: String, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            created_at,
            updated_at,
        }
    }
}

/// Input data for creating a role. Names are unique.
#[derive(Debug, Clone)]
pub struct NewRole {
    pub name: String,
}

/// Partial update for a role. `None` leaves the name unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateRole {
    pub name: Option<String>,
}
