//! Repository for work experiences and their skill joins.
//!
//! Experiences reference catalog skills by id (`skills_data`); only the
//! project resource resolves skills by name.

use std::collections::HashMap;

use sqlx::{PgPool, Postgres, Transaction};

use folio_core::types::DbId;

use crate::models::experience::{
    CreateExperience, Experience, ExperienceDetail, ExperienceListParams, UpdateExperience,
};
use crate::models::skill::SkillRef;

/// Column list for `experiences` queries.
const COLUMNS: &str = "id, title, company, description, start_date, end_date, is_current";

/// Default page size, matching the original resource's pagination.
const DEFAULT_LIMIT: i64 = 10;

/// Maximum page size.
const MAX_LIMIT: i64 = 100;

/// Provides CRUD operations for experiences.
pub struct ExperienceRepo;

impl ExperienceRepo {
    /// List experiences with search, ordering, filters, and pagination.
    pub async fn list(
        pool: &PgPool,
        params: &ExperienceListParams,
    ) -> Result<Vec<ExperienceDetail>, sqlx::Error> {
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        let offset = params.offset.unwrap_or(0);
        let order_clause = order_clause(params.ordering.as_deref());

        let query = format!(
            "SELECT {COLUMNS} FROM experiences \
             WHERE ($1::text IS NULL \
                 OR title ILIKE '%' || $1 || '%' \
                 OR company ILIKE '%' || $1 || '%' \
                 OR description ILIKE '%' || $1 || '%') \
             AND ($2::boolean IS NULL OR is_current = $2) \
             AND ($3::text IS NULL OR company = $3) \
             ORDER BY {order_clause} \
             LIMIT $4 OFFSET $5"
        );
        let experiences = sqlx::query_as::<_, Experience>(&query)
            .bind(params.search.as_deref())
            .bind(params.is_current)
            .bind(params.company.as_deref())
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;

        Self::load_details(pool, experiences).await
    }

    /// Find an experience by id, with its skills.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ExperienceDetail>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM experiences WHERE id = $1");
        let experience = sqlx::query_as::<_, Experience>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        match experience {
            Some(experience) => {
                let mut details = Self::load_details(pool, vec![experience]).await?;
                Ok(details.pop())
            }
            None => Ok(None),
        }
    }

    /// Insert an experience and its skill joins in one transaction.
    pub async fn create(
        pool: &PgPool,
        input: &CreateExperience,
    ) -> Result<ExperienceDetail, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO experiences (title, company, description, start_date, end_date, is_current) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        let experience = sqlx::query_as::<_, Experience>(&query)
            .bind(&input.title)
            .bind(&input.company)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.is_current)
            .fetch_one(&mut *tx)
            .await?;

        if let Some(skill_ids) = &input.skills_data {
            link_skills(&mut tx, experience.id, skill_ids).await?;
        }

        tx.commit().await?;

        let mut details = Self::load_details(pool, vec![experience]).await?;
        Ok(details.pop().expect("detail for just-inserted experience"))
    }

    /// Update an experience; a present `skills_data` replaces the join set.
    ///
    /// Returns `None` if no experience with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateExperience,
    ) -> Result<Option<ExperienceDetail>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE experiences SET \
                 title = COALESCE($2, title), \
                 company = COALESCE($3, company), \
                 description = COALESCE($4, description), \
                 start_date = COALESCE($5, start_date), \
                 end_date = COALESCE($6, end_date), \
                 is_current = COALESCE($7, is_current) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let experience = sqlx::query_as::<_, Experience>(&query)
            .bind(id)
            .bind(input.title.as_deref())
            .bind(input.company.as_deref())
            .bind(input.description.as_deref())
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.is_current)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(experience) = experience else {
            return Ok(None);
        };

        if let Some(skill_ids) = &input.skills_data {
            sqlx::query("DELETE FROM experience_skills WHERE experience_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            link_skills(&mut tx, id, skill_ids).await?;
        }

        tx.commit().await?;

        let mut details = Self::load_details(pool, vec![experience]).await?;
        Ok(details.pop())
    }

    /// Delete an experience by id. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM experiences WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every experience. Returns the number of rows removed.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM experiences").execute(pool).await?;
        Ok(result.rows_affected())
    }

    /// Attach catalog skills to fetched experience rows.
    async fn load_details(
        pool: &PgPool,
        experiences: Vec<Experience>,
    ) -> Result<Vec<ExperienceDetail>, sqlx::Error> {
        let ids: Vec<DbId> = experiences.iter().map(|e| e.id).collect();

        let rows: Vec<(DbId, DbId, String, Option<String>, Option<String>)> = sqlx::query_as(
            "SELECT es.experience_id, sr.id, sr.name, sr.id_icon, sr.icon \
             FROM experience_skills es \
             JOIN skill_refs sr ON sr.id = es.skill_ref_id \
             WHERE es.experience_id = ANY($1) \
             ORDER BY sr.name",
        )
        .bind(&ids)
        .fetch_all(pool)
        .await?;

        let mut skills_by_experience: HashMap<DbId, Vec<SkillRef>> = HashMap::new();
        for (experience_id, id, name, id_icon, icon) in rows {
            skills_by_experience
                .entry(experience_id)
                .or_default()
                .push(SkillRef { id, name, id_icon, icon });
        }

        Ok(experiences
            .into_iter()
            .map(|experience| {
                let skills = skills_by_experience.remove(&experience.id).unwrap_or_default();
                ExperienceDetail { experience, skills }
            })
            .collect())
    }
}

/// Map an `ordering` query value onto a whitelisted ORDER BY clause.
/// Unknown values fall back to newest-first.
fn order_clause(ordering: Option<&str>) -> &'static str {
    match ordering {
        Some("start_date") => "start_date ASC",
        Some("-start_date") => "start_date DESC",
        Some("end_date") => "end_date ASC NULLS LAST",
        Some("-end_date") => "end_date DESC NULLS LAST",
        Some("company") => "company ASC",
        Some("-company") => "company DESC",
        _ => "start_date DESC",
    }
}

/// Link catalog skills by id. Unknown ids surface as foreign-key failures
/// and roll the transaction back.
async fn link_skills(
    tx: &mut Transaction<'_, Postgres>,
    experience_id: DbId,
    skill_ids: &[DbId],
) -> Result<(), sqlx::Error> {
    for &skill_id in skill_ids {
        sqlx::query(
            "INSERT INTO experience_skills (experience_id, skill_ref_id) VALUES ($1, $2) \
             ON CONFLICT (experience_id, skill_ref_id) DO NOTHING",
        )
        .bind(experience_id)
        .bind(skill_id)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::order_clause;

    #[test]
    fn ordering_values_map_to_whitelisted_clauses() {
        assert_eq!(order_clause(Some("start_date")), "start_date ASC");
        assert_eq!(order_clause(Some("-company")), "company DESC");
        assert_eq!(order_clause(Some("-end_date")), "end_date DESC NULLS LAST");
    }

    #[test]
    fn unknown_ordering_falls_back() {
        assert_eq!(order_clause(Some("id; DROP TABLE")), "start_date DESC");
        assert_eq!(order_clause(None), "start_date DESC");
    }
}
