//! Helpers for inspecting PostgreSQL errors surfaced by SQLx.

/// Returns the violated constraint name if `e` is a unique violation.
pub fn unique_violation_constraint(e: &sqlx::Error) -> Option<String> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    Some(db_err.constraint().unwrap_or("unknown").to_string())
}

/// Returns true if `e` is a unique violation on the given constraint.
pub fn is_unique_violation_on(e: &sqlx::Error, constraint: &str) -> bool {
    unique_violation_constraint(e).is_some_and(|c| c == constraint)
}

/// Returns true if `e` is a foreign key violation on the given constraint.
pub fn is_foreign_key_violation_on(e: &sqlx::Error, constraint: &str) -> bool {
    e.as_database_error().is_some_and(|db_err| {
        db_err.is_foreign_key_violation() && db_err.constraint() == Some(constraint)
    })
}


#[cfg(test)]
mod tests {
    use super::testing::{foreign_key_violation, unique_violation};
    use super::*;

    #[test]
    fn test_non_database_error_is_not_unique_violation() {
        let err = sqlx::Error::RowNotFound;
        assert!(unique_violation_constraint(&err).is_none());
        assert!(!is_unique_violation_on(&err, "users_email_key"));
        assert!(!is_foreign_key_violation_on(&err, "user_roles_user_id_fkey"));
    }

    #[test]
    fn test_constraint_matching() {
        let err = unique_violation("users_email_key");
        assert!(is_unique_violation_on(&err, "users_email_key"));
        assert!(!is_unique_violation_on(&err, "roles_name_key"));
        assert!(!is_foreign_key_violation_on(&err, "users_email_key"));

        let err = foreign_key_violation("user_roles_user_id_fkey");
        assert!(is_foreign_key_violation_on(&err, "user_roles_user_id_fkey"));
        assert!(!is_foreign_key_violation_on(&err, "user_roles_role_id_fkey"));
        assert!(unique_violation_constraint(&err).is_none());
    }
}
