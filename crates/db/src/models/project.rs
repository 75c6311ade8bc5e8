//! Project models and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `project_media` table, ordered by `position`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectMedia {
    pub id: DbId,
    pub project_id: DbId,
    pub image_url: String,
    pub position: i32,
}

/// A project with its ordered media and resolved skill names embedded.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub media: Vec<ProjectMedia>,
    pub skills_list: Vec<String>,
}

/// Scalar fields accepted when creating a project.
#[derive(Debug, Clone)]
pub struct CreateProject {
    pub title: String,
    pub description: String,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
}

/// Scalar fields accepted when updating a project; `None` keeps the stored
/// value.
#[derive(Debug, Clone, Default)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
}

/// Query parameters for `GET /api/v1/projects`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectListParams {
    /// Case-insensitive catalog skill name filter.
    pub skill: Option<String>,
    /// Substring search over title and description.
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
