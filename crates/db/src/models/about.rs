//! About section models and DTOs. Singleton-constrained like the hero.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `abouts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct About {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub cv_url: Option<String>,
    pub updated_at: Timestamp,
}

/// DTO for creating the about section.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAbout {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[validate(url(message = "cv_url must be a valid URL"))]
    pub cv_url: Option<String>,
}

/// DTO for updating the about section; `None` keeps the stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAbout {
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(url(message = "cv_url must be a valid URL"))]
    pub cv_url: Option<String>,
}
