use serde::{Deserialize, Serialize};

use crate::domain::entities::User;

/// Public view of a user. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserView {
    pub id: i64,
    pub name: String,
    pub email: String,

    /// Role names; omitted when the user has none.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
}

pub fn present_user(user: &User) -> UserView {
    UserView {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        roles: user.roles.iter().map(|r| r.name.clone()).collect(),
    }
}
