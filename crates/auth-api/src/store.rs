//! User store
//!
//! The auth service owns a single `users` table, created on startup.

use serde::Serialize;
use sqlx::PgPool;

use crate::error::AuthResult;
use crate::token::Role;

/// Row type for the `users` table.
///
/// The password hash never leaves the service.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRow {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

/// Repository for the users table
pub struct UserRepo;

impl UserRepo {
    /// Bring the schema up.
    pub async fn init_schema(pool: &PgPool) -> AuthResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id BIGSERIAL PRIMARY KEY,
                email TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL,
                first_name TEXT NOT NULL DEFAULT '',
                last_name TEXT NOT NULL DEFAULT '',
                role TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Look a user up by (already normalized) email. Absence is not an
    /// error here - login falls back to the registry.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> AuthResult<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Insert a user and return the assigned id.
    pub async fn insert(
        pool: &PgPool,
        email: &str,
        password_hash: &str,
        first_name: &str,
        last_name: &str,
        role: Role,
    ) -> AuthResult<i64> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO users (email, password, first_name, last_name, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(first_name)
        .bind(last_name)
        .bind(role.as_str())
        .fetch_one(pool)
        .await?;
        Ok(id)
    }
}
