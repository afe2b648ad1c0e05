//! PostgreSQL implementation of role repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool};

use crate::domain::entities::{NewRole, Role, UpdateRole};
use crate::domain::repositories::RoleRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on;

const NAME_CONSTRAINT: &str = "roles_name_key";

#[derive(FromRow)]
struct RoleRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<RoleRow> for Role {
    fn from(r: RoleRow) -> Self {
        Role::new(r.id, r.name, r.created_at, r.updated_at)
    }
}

/// PostgreSQL repository for roles.
pub struct PgRoleRepository {
    pool: Arc<PgPool>,
}

impl PgRoleRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn map_write_error(e: sqlx::Error) -> AppError {
    if is_unique_violation_on(&e, NAME_CONSTRAINT) {
        return AppError::conflict("Role already exists", json!({}));
    }
    AppError::from(e)
}

#[async_trait]
impl RoleRepository for PgRoleRepository {
    async fn create(&self, new_role: NewRole) -> Result<Role, AppError> {
        let row = sqlx::query_as::<_, RoleRow>(
            r#"
            INSERT INTO roles (name)
            VALUES ($1)
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(&new_role.name)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_write_error)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Role>, AppError> {
        let row = sqlx::query_as::<_, RoleRow>(
            "SELECT id, name, created_at, updated_at FROM roles WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Role::from))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, AppError> {
        let row = sqlx::query_as::<_, RoleRow>(
            "SELECT id, name, created_at, updated_at FROM roles WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Role::from))
    }

    async fn update(&self, id: i64, update: UpdateRole) -> Result<Role, AppError> {
        let row = sqlx::query_as::<_, RoleRow>(
            r#"
            UPDATE roles SET
                name       = COALESCE($2, name),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(update.name)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_write_error)?;

        row.map(Role::from)
            .ok_or_else(|| AppError::not_found("Role not found", json!({ "id": id })))
    }

    async fn list(&self) -> Result<Vec<Role>, AppError> {
        let rows = sqlx::query_as::<_, RoleRow>(
            "SELECT id, name, created_at, updated_at FROM roles ORDER BY name",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Role::from).collect())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
