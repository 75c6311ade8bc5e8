//! Hero section models and DTOs.
//!
//! The hero section is singleton-constrained: the handler refuses to create
//! a second row.

use folio_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `hero_sections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HeroSection {
    pub id: DbId,
    pub headline: String,
    pub subheadline: String,
    pub image_url: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
}

/// DTO for creating the hero section.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHeroSection {
    #[validate(length(min = 1, message = "headline must not be empty"))]
    pub headline: String,
    #[serde(default)]
    pub subheadline: String,
    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: Option<String>,
    #[validate(url(message = "instagram must be a valid URL"))]
    pub instagram: Option<String>,
    #[validate(url(message = "linkedin must be a valid URL"))]
    pub linkedin: Option<String>,
    #[validate(url(message = "github must be a valid URL"))]
    pub github: Option<String>,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// DTO for updating the hero section; `None` keeps the stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateHeroSection {
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: Option<String>,
    #[validate(url(message = "instagram must be a valid URL"))]
    pub instagram: Option<String>,
    #[validate(url(message = "linkedin must be a valid URL"))]
    pub linkedin: Option<String>,
    #[validate(url(message = "github must be a valid URL"))]
    pub github: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

fn default_true() -> bool {
    true
}
