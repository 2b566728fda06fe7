//! MySQL implementation of the VerificationCodeRepository trait.
//!
//! Rows live in the `codes` table, which carries a unique index on `email`.
//! Store failures are logged with their cause and surfaced to callers as
//! [`DomainError::Internal`] with a message that is safe to return to clients.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sf_core::domain::entities::verification_code::VerificationCode;
use sf_core::errors::DomainError;
use sf_core::repositories::verification_code::{VerificationCodeRepository, DELETE_BATCH_LIMIT};
use sf_shared::utils::validation::mask_email;

/// MySQL implementation of VerificationCodeRepository
pub struct MySqlVerificationCodeRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlVerificationCodeRepository {
    /// Create a new MySQL verification code repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to VerificationCode entity
    fn row_to_code(row: &sqlx::mysql::MySqlRow) -> Result<VerificationCode, DomainError> {
        let id: String = row.try_get("id").map_err(|e| Self::column_error("id", e))?;

        Ok(VerificationCode {
            id: Uuid::parse_str(&id).map_err(|e| {
                tracing::error!(error = %e, "Stored verification code id is not a UUID");
                Self::failure("find")
            })?,
            email: row.try_get("email").map_err(|e| Self::column_error("email", e))?,
            code: row.try_get("code").map_err(|e| Self::column_error("code", e))?,
            expires: row
                .try_get::<DateTime<Utc>, _>("expires")
                .map_err(|e| Self::column_error("expires", e))?,
            created: row
                .try_get::<DateTime<Utc>, _>("created")
                .map_err(|e| Self::column_error("created", e))?,
        })
    }

    fn column_error(column: &str, e: sqlx::Error) -> DomainError {
        tracing::error!(column, error = %e, "Failed to decode verification code column");
        Self::failure("find")
    }

    fn query_error(action: &'static str, e: sqlx::Error) -> DomainError {
        tracing::error!(action, error = %e, "Verification code query failed");
        Self::failure(action)
    }

    fn failure(action: &str) -> DomainError {
        DomainError::Internal {
            message: format!("Failed to {} verification code", action),
        }
    }
}

#[async_trait]
impl VerificationCodeRepository for MySqlVerificationCodeRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<VerificationCode>, DomainError> {
        let query = r#"
            SELECT id, email, code, expires, created
            FROM codes
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::query_error("find", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_code(&row)?)),
            None => Ok(None),
        }
    }

    async fn upsert_replacing(&self, code: VerificationCode) -> Result<VerificationCode, DomainError> {
        // The unique email index turns a concurrent second insert into an update,
        // so the later write wins.
        let query = r#"
            INSERT INTO codes (id, email, code, expires, created)
            VALUES (?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                id = VALUES(id),
                code = VALUES(code),
                expires = VALUES(expires),
                created = VALUES(created)
        "#;

        sqlx::query(query)
            .bind(code.id.to_string())
            .bind(&code.email)
            .bind(&code.code)
            .bind(code.expires)
            .bind(code.created)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::query_error("save", e))?;

        tracing::debug!(email = %mask_email(&code.email), id = %code.id, "Verification code stored");

        Ok(code)
    }

    async fn delete_by_email(&self, email: &str) -> Result<u64, DomainError> {
        let query = format!("DELETE FROM codes WHERE email = ? LIMIT {}", DELETE_BATCH_LIMIT);

        let result = sqlx::query(&query)
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::query_error("delete", e))?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let query = "DELETE FROM codes WHERE id = ?";

        let result = sqlx::query(query)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| Self::query_error("delete", e))?;

        Ok(result.rows_affected() > 0)
    }
}
