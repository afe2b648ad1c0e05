use serde::{Deserialize, Serialize};

use super::format_timestamp;
use crate::domain::entities::Role;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoleView {
    pub id: i64,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

pub fn present_role(role: &Role) -> RoleView {
    RoleView {
        id: role.id,
        name: role.name.clone(),
        created_at: format_timestamp(&role.created_at),
        updated_at: format_timestamp(&role.updated_at),
    }
}
