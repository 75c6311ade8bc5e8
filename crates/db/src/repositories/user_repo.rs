//! Repository for user accounts.
//!
//! There is no registration path: accounts are provisioned out of band and
//! only superusers can authenticate against the API.

use sqlx::PgPool;

use folio_core::types::{DbId, Timestamp};

use crate::models::user::{UpdateProfile, User};

/// Column list for `users` queries.
const COLUMNS: &str = "\
    id, first_name, last_name, email, password_hash, is_superuser, is_active, \
    password_reset_token_hash, password_reset_expires_at, created_at, updated_at";

/// Provides account lookup and credential maintenance.
pub struct UserRepo;

impl UserRepo {
    /// Find a user by email, case-insensitively.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE LOWER(email) = LOWER($1)");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update profile fields; `None` keeps the stored value.
    ///
    /// Returns `None` if no user with the given id exists.
    pub async fn update_profile(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET \
                 first_name = COALESCE($2, first_name), \
                 last_name = COALESCE($3, last_name), \
                 email = COALESCE($4, email), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(input.first_name.as_deref())
            .bind(input.last_name.as_deref())
            .bind(input.email.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Replace the password hash. Any outstanding reset token is cleared so
    /// it cannot be replayed after a successful change.
    pub async fn set_password(
        pool: &PgPool,
        id: DbId,
        password_hash: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE users SET \
                 password_hash = $2, \
                 password_reset_token_hash = NULL, \
                 password_reset_expires_at = NULL, \
                 updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(password_hash)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Store the digest and expiry of a freshly issued reset token.
    pub async fn set_reset_token(
        pool: &PgPool,
        id: DbId,
        token_hash: &str,
        expires_at: Timestamp,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE users SET \
                 password_reset_token_hash = $2, \
                 password_reset_expires_at = $3, \
                 updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(token_hash)
        .bind(expires_at)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Find the user whose unexpired reset token digest matches.
    pub async fn find_by_reset_token(
        pool: &PgPool,
        id: DbId,
        token_hash: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users \
             WHERE id = $1 \
             AND password_reset_token_hash = $2 \
             AND password_reset_expires_at > NOW()"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(token_hash)
            .fetch_optional(pool)
            .await
    }
}
