use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::{RepoError, RepoResult};

#[derive(Debug, Clone)]
pub struct Admin {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
}

/// Single-role admin accounts. No permission graph.
#[derive(Clone)]
pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Admin>> {
        let row = sqlx::query("SELECT id, email, password_hash FROM admins WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|row| Admin {
            id: row.get("id"),
            email: row.get("email"),
            password_hash: row.get("password_hash"),
        }))
    }

    pub async fn set_password(&self, email: &str, password_hash: &str) -> RepoResult<()> {
        let result = sqlx::query(
            "UPDATE admins SET password_hash = $2, updated_at = now() WHERE email = $1",
        )
        .bind(email)
        .bind(password_hash)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("admin `{email}`")));
        }
        Ok(())
    }

    /// Create the account if that email is not taken. Used by the bootstrap
    /// path; an existing account is left alone.
    pub async fn ensure_admin(&self, email: &str, password_hash: &str) -> RepoResult<()> {
        sqlx::query(
            "INSERT INTO admins (id, email, password_hash) VALUES ($1, $2, $3) \
             ON CONFLICT (email) DO NOTHING",
        )
        .bind(Uuid::new_v4())
        .bind(email)
        .bind(password_hash)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
