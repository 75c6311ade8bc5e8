//! Skill catalog models.

use folio_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `skill_refs` table: one globally unique skill name.
///
/// `name` is unique under case-insensitive comparison; the stored value
/// preserves the casing it was first created with.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SkillRef {
    pub id: DbId,
    pub name: String,
    /// Short slug understood by icon services (e.g. `"python"`, `"react"`).
    pub id_icon: Option<String>,
    /// Full icon URL, when one has been assigned.
    pub icon: Option<String>,
}

/// DTO for `POST /api/v1/skills`. Creation is create-or-get: an existing
/// case-insensitive match is returned instead of a duplicate.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSkillRef {
    pub name: String,
    pub id_icon: Option<String>,
    pub icon: Option<String>,
}
