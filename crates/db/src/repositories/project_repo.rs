//! Repository for projects, their media rows, and their skill joins.
//!
//! The replace semantics here are deliberately asymmetric to the blog
//! post repository: a project update only replaces the skill set when
//! skill data was supplied (an explicitly empty list counts as supplied),
//! and only replaces media when at least one file arrived. An update that
//! supplies neither leaves both untouched. Posts, by contrast, always
//! clear and rebuild their attachments. Both behaviors are contracts.

use std::collections::HashMap;

use sqlx::{PgPool, Postgres, Transaction};

use folio_core::types::DbId;

use crate::models::project::{
    CreateProject, Project, ProjectDetail, ProjectListParams, ProjectMedia, UpdateProject,
};
use crate::repositories::SkillRepo;

/// Column list for `projects` queries.
const PROJECT_COLUMNS: &str =
    "id, title, description, github_url, live_url, created_by, created_at, updated_at";

/// Default page size for project listing.
const DEFAULT_LIMIT: i64 = 50;

/// Maximum page size for project listing.
const MAX_LIMIT: i64 = 100;

/// Provides CRUD operations for projects with media and skill joins.
pub struct ProjectRepo;

impl ProjectRepo {
    /// List projects, newest first, with optional skill and search filters.
    pub async fn list(
        pool: &PgPool,
        params: &ProjectListParams,
    ) -> Result<Vec<ProjectDetail>, sqlx::Error> {
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        let offset = params.offset.unwrap_or(0);

        let query = format!(
            "SELECT {PROJECT_COLUMNS} FROM projects p \
             WHERE ($1::text IS NULL OR EXISTS ( \
                 SELECT 1 FROM project_skills ps \
                 JOIN skill_refs sr ON sr.id = ps.skill_ref_id \
                 WHERE ps.project_id = p.id AND LOWER(sr.name) = LOWER($1))) \
             AND ($2::text IS NULL \
                 OR p.title ILIKE '%' || $2 || '%' \
                 OR p.description ILIKE '%' || $2 || '%') \
             ORDER BY p.created_at DESC \
             LIMIT $3 OFFSET $4"
        );
        let projects = sqlx::query_as::<_, Project>(&query)
            .bind(params.skill.as_deref())
            .bind(params.search.as_deref())
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;

        Self::load_details(pool, projects).await
    }

    /// Find a project by id, with media and skill names.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectDetail>, sqlx::Error> {
        let query = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1");
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        match project {
            Some(project) => {
                let mut details = Self::load_details(pool, vec![project]).await?;
                Ok(details.pop())
            }
            None => Ok(None),
        }
    }

    /// Insert a project, resolve and link its skills, and write its media
    /// rows, all in one transaction.
    ///
    /// `media_urls` are stored file locations in submission order; each row
    /// records its position.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProject,
        created_by: Option<DbId>,
        skills: &[String],
        media_urls: &[String],
    ) -> Result<ProjectDetail, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO projects (title, description, github_url, live_url, created_by) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {PROJECT_COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.github_url.as_deref())
            .bind(input.live_url.as_deref())
            .bind(created_by)
            .fetch_one(&mut *tx)
            .await?;

        link_skills(&mut tx, project.id, skills).await?;
        insert_media(&mut tx, project.id, media_urls).await?;

        tx.commit().await?;

        let mut details = Self::load_details(pool, vec![project]).await?;
        Ok(details.pop().expect("detail for just-inserted project"))
    }

    /// Update a project in one transaction: merge the provided scalar
    /// fields, then apply the replace semantics described at module level.
    ///
    /// Returns `None` if no project with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
        skills: Option<&[String]>,
        media_urls: &[String],
    ) -> Result<Option<ProjectDetail>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE projects SET \
                 title = COALESCE($2, title), \
                 description = COALESCE($3, description), \
                 github_url = COALESCE($4, github_url), \
                 live_url = COALESCE($5, live_url), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {PROJECT_COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(input.title.as_deref())
            .bind(input.description.as_deref())
            .bind(input.github_url.as_deref())
            .bind(input.live_url.as_deref())
            .fetch_optional(&mut *tx)
            .await?;

        let Some(project) = project else {
            return Ok(None);
        };

        // Skill data supplied (possibly empty): clear and re-link.
        if let Some(skills) = skills {
            sqlx::query("DELETE FROM project_skills WHERE project_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            link_skills(&mut tx, id, skills).await?;
        }

        // Files supplied: destructive replace, new positions from the
        // submitted order.
        if !media_urls.is_empty() {
            sqlx::query("DELETE FROM project_media WHERE project_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            insert_media(&mut tx, id, media_urls).await?;
        }

        tx.commit().await?;

        let mut details = Self::load_details(pool, vec![project]).await?;
        Ok(details.pop())
    }

    /// Delete a project. Media and skill joins cascade.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Attach media rows and skill names to fetched project rows.
    async fn load_details(
        pool: &PgPool,
        projects: Vec<Project>,
    ) -> Result<Vec<ProjectDetail>, sqlx::Error> {
        let ids: Vec<DbId> = projects.iter().map(|p| p.id).collect();

        let media = sqlx::query_as::<_, ProjectMedia>(
            "SELECT id, project_id, image_url, position FROM project_media \
             WHERE project_id = ANY($1) ORDER BY position, id",
        )
        .bind(&ids)
        .fetch_all(pool)
        .await?;

        let skills: Vec<(DbId, String)> = sqlx::query_as(
            "SELECT ps.project_id, sr.name FROM project_skills ps \
             JOIN skill_refs sr ON sr.id = ps.skill_ref_id \
             WHERE ps.project_id = ANY($1) \
             ORDER BY sr.name",
        )
        .bind(&ids)
        .fetch_all(pool)
        .await?;

        let mut media_by_project: HashMap<DbId, Vec<ProjectMedia>> = HashMap::new();
        for row in media {
            media_by_project.entry(row.project_id).or_default().push(row);
        }
        let mut skills_by_project: HashMap<DbId, Vec<String>> = HashMap::new();
        for (project_id, name) in skills {
            skills_by_project.entry(project_id).or_default().push(name);
        }

        Ok(projects
            .into_iter()
            .map(|project| {
                let media = media_by_project.remove(&project.id).unwrap_or_default();
                let skills_list = skills_by_project.remove(&project.id).unwrap_or_default();
                ProjectDetail { project, media, skills_list }
            })
            .collect())
    }
}

/// Resolve each name against the catalog (create-or-get, first-seen casing
/// preserved) and link it to the project. The join insert is idempotent.
async fn link_skills(
    tx: &mut Transaction<'_, Postgres>,
    project_id: DbId,
    names: &[String],
) -> Result<(), sqlx::Error> {
    for name in names {
        let Some(skill_id) = SkillRepo::resolve_name(&mut **tx, name).await? else {
            continue;
        };
        sqlx::query(
            "INSERT INTO project_skills (project_id, skill_ref_id) VALUES ($1, $2) \
             ON CONFLICT (project_id, skill_ref_id) DO NOTHING",
        )
        .bind(project_id)
        .bind(skill_id)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

/// Insert media rows with positions following the submitted order.
async fn insert_media(
    tx: &mut Transaction<'_, Postgres>,
    project_id: DbId,
    media_urls: &[String],
) -> Result<(), sqlx::Error> {
    for (position, url) in media_urls.iter().enumerate() {
        sqlx::query(
            "INSERT INTO project_media (project_id, image_url, position) VALUES ($1, $2, $3)",
        )
        .bind(project_id)
        .bind(url)
        .bind(position as i32)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}
