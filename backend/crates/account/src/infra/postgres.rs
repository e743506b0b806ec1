//! PostgreSQL Repository Implementation
//!
//! Expects a `users` table shaped like:
//!
//! ```sql
//! CREATE TABLE users (
//!     seq        BIGSERIAL PRIMARY KEY,
//!     id         TEXT NOT NULL,
//!     name       TEXT NOT NULL,
//!     email      TEXT NOT NULL,
//!     password   TEXT NOT NULL,
//!     created_at TIMESTAMPTZ NOT NULL DEFAULT now()
//! );
//! CREATE INDEX users_email_idx ON users (email);
//! ```
//!
//! Creating and migrating the table is left to the deployment.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entity::user::{StoredUser, UserRecord};
use crate::domain::repository::UserRepository;
use crate::error::AccountResult;

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    async fn get_by_email(&self, email: &str) -> AccountResult<Option<StoredUser>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                name,
                email,
                password,
                created_at
            FROM users
            WHERE email = $1
            ORDER BY seq
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_stored_user))
    }

    async fn create(&self, record: &UserRecord) -> AccountResult<StoredUser> {
        let created_at: DateTime<Utc> = sqlx::query_scalar(
            r#"
            INSERT INTO users (
                id,
                name,
                email,
                password
            ) VALUES ($1, $2, $3, $4)
            RETURNING created_at
            "#,
        )
        .bind(record.id.as_str())
        .bind(record.name.as_str())
        .bind(record.email.as_str())
        .bind(record.password.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(StoredUser {
            record: record.clone(),
            created_at,
        })
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    password: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_stored_user(self) -> StoredUser {
        StoredUser {
            record: UserRecord {
                id: self.id,
                name: self.name,
                email: self.email,
                password: self.password,
            },
            created_at: self.created_at,
        }
    }
}
