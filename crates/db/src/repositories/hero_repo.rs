//! Repository for the singleton hero section.

use sqlx::PgPool;

use folio_core::types::DbId;

use crate::models::hero::{CreateHeroSection, HeroSection, UpdateHeroSection};

/// Column list for `hero_sections` queries.
const COLUMNS: &str =
    "id, headline, subheadline, image_url, instagram, linkedin, github, display_order, is_active";

/// Provides CRUD operations for the hero section.
pub struct HeroRepo;

impl HeroRepo {
    /// List active hero sections for the public landing page.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<HeroSection>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM hero_sections WHERE is_active ORDER BY display_order"
        );
        sqlx::query_as::<_, HeroSection>(&query).fetch_all(pool).await
    }

    /// List every hero section row for the admin surface.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<HeroSection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hero_sections ORDER BY display_order");
        sqlx::query_as::<_, HeroSection>(&query).fetch_all(pool).await
    }

    /// Count existing rows; the handler uses this to enforce the singleton
    /// constraint before creating.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM hero_sections")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Find a hero section by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<HeroSection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hero_sections WHERE id = $1");
        sqlx::query_as::<_, HeroSection>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert the hero section row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateHeroSection,
    ) -> Result<HeroSection, sqlx::Error> {
        let query = format!(
            "INSERT INTO hero_sections \
                 (headline, subheadline, image_url, instagram, linkedin, github, display_order, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HeroSection>(&query)
            .bind(&input.headline)
            .bind(&input.subheadline)
            .bind(input.image_url.as_deref())
            .bind(input.instagram.as_deref())
            .bind(input.linkedin.as_deref())
            .bind(input.github.as_deref())
            .bind(input.display_order)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Update the hero section; `None` fields keep their stored value.
    ///
    /// Returns `None` if no row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHeroSection,
    ) -> Result<Option<HeroSection>, sqlx::Error> {
        let query = format!(
            "UPDATE hero_sections SET \
                 headline = COALESCE($2, headline), \
                 subheadline = COALESCE($3, subheadline), \
                 image_url = COALESCE($4, image_url), \
                 instagram = COALESCE($5, instagram), \
                 linkedin = COALESCE($6, linkedin), \
                 github = COALESCE($7, github), \
                 display_order = COALESCE($8, display_order), \
                 is_active = COALESCE($9, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HeroSection>(&query)
            .bind(id)
            .bind(input.headline.as_deref())
            .bind(input.subheadline.as_deref())
            .bind(input.image_url.as_deref())
            .bind(input.instagram.as_deref())
            .bind(input.linkedin.as_deref())
            .bind(input.github.as_deref())
            .bind(input.display_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a hero section row. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM hero_sections WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
