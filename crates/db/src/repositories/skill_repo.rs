//! Repository for the `skill_refs` catalog.
//!
//! The catalog is shared by projects and experiences. Names are unique
//! case-insensitively (enforced by a functional index on `LOWER(name)`);
//! the stored casing is whatever the first submitter used.

use sqlx::{PgConnection, PgPool};

use folio_core::types::DbId;

use crate::models::skill::{CreateSkillRef, SkillRef};

/// Column list for `skill_refs` queries.
const COLUMNS: &str = "id, name, id_icon, icon";

/// Provides catalog operations for skill references.
pub struct SkillRepo;

impl SkillRepo {
    /// List the whole catalog, ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<SkillRef>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skill_refs ORDER BY name");
        sqlx::query_as::<_, SkillRef>(&query).fetch_all(pool).await
    }

    /// Find a catalog entry by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SkillRef>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skill_refs WHERE id = $1");
        sqlx::query_as::<_, SkillRef>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a catalog entry, or return the existing one whose name matches
    /// case-insensitively. The trimmed input casing is preserved on first
    /// creation and never overwritten afterwards.
    pub async fn create_or_get(
        pool: &PgPool,
        input: &CreateSkillRef,
    ) -> Result<SkillRef, sqlx::Error> {
        let name = input.name.trim();

        let find = format!("SELECT {COLUMNS} FROM skill_refs WHERE LOWER(name) = LOWER($1)");
        if let Some(existing) = sqlx::query_as::<_, SkillRef>(&find)
            .bind(name)
            .fetch_optional(pool)
            .await?
        {
            return Ok(existing);
        }

        let insert = format!(
            "INSERT INTO skill_refs (name, id_icon, icon) VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SkillRef>(&insert)
            .bind(name)
            .bind(input.id_icon.as_deref())
            .bind(input.icon.as_deref())
            .fetch_one(pool)
            .await
    }

    /// Delete a catalog entry. Cascades to project and experience join rows.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM skill_refs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Transaction-scoped create-or-get used by the project upsert: look up
    /// by case-insensitive name, insert with the submitter's casing when
    /// absent. Blank names (after trimming) resolve to `None`.
    pub(crate) async fn resolve_name(
        conn: &mut PgConnection,
        name: &str,
    ) -> Result<Option<DbId>, sqlx::Error> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }

        let existing: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM skill_refs WHERE LOWER(name) = LOWER($1)")
                .bind(name)
                .fetch_optional(&mut *conn)
                .await?;
        if let Some((id,)) = existing {
            return Ok(Some(id));
        }

        let (id,): (DbId,) =
            sqlx::query_as("INSERT INTO skill_refs (name) VALUES ($1) RETURNING id")
                .bind(name)
                .fetch_one(&mut *conn)
                .await?;
        Ok(Some(id))
    }
}
