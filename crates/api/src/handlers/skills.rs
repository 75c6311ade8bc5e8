//! Handlers for the `/skills` catalog resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::skill::{CreateSkillRef, SkillRef};
use folio_db::repositories::SkillRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireSuperuser;
use crate::state::AppState;

/// GET /api/v1/skills
///
/// Public catalog listing, ordered by name.
pub async fn list_skills(State(state): State<AppState>) -> AppResult<Json<Vec<SkillRef>>> {
    let skills = SkillRepo::list(&state.pool).await?;
    Ok(Json(skills))
}

/// POST /api/v1/skills
///
/// Create a catalog entry, or return the existing case-insensitive match.
/// Superuser only.
pub async fn create_skill(
    RequireSuperuser(admin): RequireSuperuser,
    State(state): State<AppState>,
    Json(input): Json<CreateSkillRef>,
) -> AppResult<(StatusCode, Json<SkillRef>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "name must not be empty".into(),
        )));
    }

    let skill = SkillRepo::create_or_get(&state.pool, &input).await?;

    tracing::info!(
        skill_id = skill.id,
        name = %skill.name,
        user_id = admin.user_id,
        "Skill created or reused",
    );

    Ok((StatusCode::CREATED, Json(skill)))
}

/// DELETE /api/v1/skills/{id}
///
/// Delete a catalog entry; join rows cascade. Superuser only.
pub async fn delete_skill(
    RequireSuperuser(admin): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = SkillRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Skill", id)));
    }

    tracing::info!(skill_id = id, user_id = admin.user_id, "Skill deleted");

    Ok(StatusCode::NO_CONTENT)
}
