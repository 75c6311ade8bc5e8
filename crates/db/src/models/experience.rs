//! Work experience models and DTOs.

use chrono::NaiveDate;
use folio_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::skill::SkillRef;

/// A row from the `experiences` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Experience {
    pub id: DbId,
    pub title: String,
    pub company: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
}

/// An experience with its catalog skills embedded.
#[derive(Debug, Clone, Serialize)]
pub struct ExperienceDetail {
    #[serde(flatten)]
    pub experience: Experience,
    pub skills: Vec<SkillRef>,
}

/// DTO for creating an experience. `skills_data` carries catalog entry ids
/// (not names — only projects resolve skills by name).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateExperience {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_current: bool,
    pub skills_data: Option<Vec<DbId>>,
}

/// DTO for updating an experience. `None` fields keep their stored value;
/// a present `skills_data` replaces the whole join set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateExperience {
    pub title: Option<String>,
    pub company: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_current: Option<bool>,
    pub skills_data: Option<Vec<DbId>>,
}

/// Query parameters for `GET /api/v1/experiences`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExperienceListParams {
    /// Substring search over title, company, and description.
    pub search: Option<String>,
    /// One of `start_date`, `end_date`, `company`; prefix `-` for
    /// descending. Unknown values fall back to the default ordering.
    pub ordering: Option<String>,
    pub is_current: Option<bool>,
    pub company: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
