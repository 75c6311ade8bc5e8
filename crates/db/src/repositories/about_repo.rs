//! Repository for the singleton about section.

use sqlx::PgPool;

use folio_core::types::DbId;

use crate::models::about::{About, CreateAbout, UpdateAbout};

/// Column list for `abouts` queries.
const COLUMNS: &str = "id, title, description, cv_url, updated_at";

/// Provides CRUD operations for the about section.
pub struct AboutRepo;

impl AboutRepo {
    /// Fetch the about section, if one has been created.
    pub async fn get(pool: &PgPool) -> Result<Option<About>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM abouts ORDER BY id LIMIT 1");
        sqlx::query_as::<_, About>(&query).fetch_optional(pool).await
    }

    /// Count existing rows; used for the singleton check.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM abouts")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Insert the about section row.
    pub async fn create(pool: &PgPool, input: &CreateAbout) -> Result<About, sqlx::Error> {
        let query = format!(
            "INSERT INTO abouts (title, description, cv_url) VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, About>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.cv_url.as_deref())
            .fetch_one(pool)
            .await
    }

    /// Update the about section; bumps `updated_at`.
    ///
    /// Returns `None` if no row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAbout,
    ) -> Result<Option<About>, sqlx::Error> {
        let query = format!(
            "UPDATE abouts SET \
                 title = COALESCE($2, title), \
                 description = COALESCE($3, description), \
                 cv_url = COALESCE($4, cv_url), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, About>(&query)
            .bind(id)
            .bind(input.title.as_deref())
            .bind(input.description.as_deref())
            .bind(input.cv_url.as_deref())
            .fetch_optional(pool)
            .await
    }
}
