//! Handlers for the `/experiences` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::experience::{
    CreateExperience, ExperienceDetail, ExperienceListParams, UpdateExperience,
};
use folio_db::repositories::ExperienceRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/experiences
///
/// Public list with search, ordering, filter, and pagination params.
pub async fn list_experiences(
    State(state): State<AppState>,
    Query(params): Query<ExperienceListParams>,
) -> AppResult<Json<Vec<ExperienceDetail>>> {
    let experiences = ExperienceRepo::list(&state.pool, &params).await?;
    Ok(Json(experiences))
}

/// GET /api/v1/experiences/{id}
pub async fn get_experience(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ExperienceDetail>> {
    let experience = ExperienceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Experience", id)))?;
    Ok(Json(experience))
}

/// POST /api/v1/experiences
pub async fn create_experience(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateExperience>,
) -> AppResult<(StatusCode, Json<ExperienceDetail>)> {
    let detail = ExperienceRepo::create(&state.pool, &input).await?;

    tracing::info!(
        experience_id = detail.experience.id,
        company = %detail.experience.company,
        user_id = auth.user_id,
        "Experience created",
    );

    Ok((StatusCode::CREATED, Json(detail)))
}

/// PUT /api/v1/experiences/{id}
///
/// Merge scalar fields; a present `skills_data` replaces the skill joins.
pub async fn update_experience(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateExperience>,
) -> AppResult<Json<ExperienceDetail>> {
    let detail = ExperienceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Experience", id)))?;

    tracing::info!(experience_id = id, user_id = auth.user_id, "Experience updated");

    Ok(Json(detail))
}

/// DELETE /api/v1/experiences/{id}
pub async fn delete_experience(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ExperienceRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Experience", id)));
    }

    tracing::info!(experience_id = id, user_id = auth.user_id, "Experience deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/experiences
///
/// Remove every experience. Kept from the original resource surface.
pub async fn delete_all_experiences(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<StatusCode> {
    let removed = ExperienceRepo::delete_all(&state.pool).await?;

    tracing::info!(removed, user_id = auth.user_id, "All experiences deleted");

    Ok(StatusCode::NO_CONTENT)
}
