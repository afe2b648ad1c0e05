//! PostgreSQL implementation of user repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool};

use crate::domain::entities::{NewUser, Role, UpdateUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::db_error::{is_foreign_key_violation_on, is_unique_violation_on};

const EMAIL_CONSTRAINT: &str = "users_email_key";
const USER_ROLE_USER_FK: &str = "user_roles_user_id_fkey";
const USER_ROLE_ROLE_FK: &str = "user_roles_role_id_fkey";

#[derive(FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self, roles: Vec<Role>) -> User {
        User::new(
            self.id,
            self.name,
            self.email,
            self.password_hash,
            roles,
            self.created_at,
            self.updated_at,
        )
    }
}

#[derive(FromRow)]
struct UserRoleRow {
    user_id: i64,
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// PostgreSQL repository for users.
///
/// Roles are loaded with one extra query per call (batched with `ANY($1)` for lists).
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn load_roles(&self, user_ids: &[i64]) -> Result<HashMap<i64, Vec<Role>>, AppError> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, UserRoleRow>(
            r#"
            SELECT ur.user_id, r.id, r.name, r.created_at, r.updated_at
            FROM user_roles ur
            JOIN roles r ON r.id = ur.role_id
            WHERE ur.user_id = ANY($1)
            ORDER BY r.name
            "#,
        )
        .bind(user_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut by_user: HashMap<i64, Vec<Role>> = HashMap::new();
        for row in rows {
            by_user
                .entry(row.user_id)
                .or_default()
                .push(Role::new(row.id, row.name, row.created_at, row.updated_at));
        }

        Ok(by_user)
    }

    async fn with_roles(&self, row: Option<UserRow>) -> Result<Option<User>, AppError> {
        let Some(row) = row else {
            return Ok(None);
        };

        let roles = self
            .load_roles(&[row.id])
            .await?
            .remove(&row.id)
            .unwrap_or_default();

        Ok(Some(row.into_user(roles)))
    }
}

fn map_write_error(e: sqlx::Error) -> AppError {
    if is_unique_violation_on(&e, EMAIL_CONSTRAINT) {
        return AppError::conflict("Email already registered", json!({}));
    }
    AppError::from(e)
}

fn map_assign_error(e: sqlx::Error, user_id: i64, role_id: i64) -> AppError {
    if is_foreign_key_violation_on(&e, USER_ROLE_USER_FK) {
        return AppError::not_found("User not found", json!({ "id": user_id }));
    }
    if is_foreign_key_violation_on(&e, USER_ROLE_ROLE_FK) {
        return AppError::not_found("Role not found", json!({ "id": role_id }));
    }
    AppError::from(e)
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_write_error)?;

        Ok(row.into_user(Vec::new()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, password_hash, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        self.with_roles(row).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, password_hash, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        self.with_roles(row).await
    }

    async fn update(&self, id: i64, update: UpdateUser) -> Result<User, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users SET
                name          = COALESCE($2, name),
                email         = COALESCE($3, email),
                password_hash = COALESCE($4, password_hash),
                updated_at    = NOW()
            WHERE id = $1
            RETURNING id, name, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(update.name)
        .bind(update.email)
        .bind(update.password_hash)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_write_error)?;

        self.with_roles(row)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({ "id": id })))
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, password_hash, created_at, updated_at
            FROM users
            ORDER BY id
            OFFSET $1
            LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let mut roles = self.load_roles(&ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let user_roles = roles.remove(&row.id).unwrap_or_default();
                row.into_user(user_roles)
            })
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn assign_role(&self, user_id: i64, role_id: i64) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO user_roles (user_id, role_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(role_id)
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| map_assign_error(e, user_id, role_id))?;

        Ok(())
    }
}
