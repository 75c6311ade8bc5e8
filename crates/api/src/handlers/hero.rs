//! Handlers for the hero section.
//!
//! The public landing page reads active rows; the admin surface manages
//! the singleton. Creation is refused once a row exists.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::hero::{CreateHeroSection, HeroSection, UpdateHeroSection};
use folio_db::repositories::HeroRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::validate_dto;
use crate::middleware::auth::RequireSuperuser;
use crate::state::AppState;

/// GET /api/v1/hero
///
/// Public: active hero sections in display order.
pub async fn public_list(State(state): State<AppState>) -> AppResult<Json<Vec<HeroSection>>> {
    let sections = HeroRepo::list_active(&state.pool).await?;
    Ok(Json(sections))
}

/// GET /api/v1/hero/admin
pub async fn admin_list(
    RequireSuperuser(_admin): RequireSuperuser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<HeroSection>>> {
    let sections = HeroRepo::list_all(&state.pool).await?;
    Ok(Json(sections))
}

/// POST /api/v1/hero/admin
///
/// Create the hero section. Fails once one exists.
pub async fn create(
    RequireSuperuser(admin): RequireSuperuser,
    State(state): State<AppState>,
    Json(input): Json<CreateHeroSection>,
) -> AppResult<(StatusCode, Json<HeroSection>)> {
    validate_dto(&input)?;

    if HeroRepo::count(&state.pool).await? > 0 {
        return Err(AppError::Core(CoreError::Validation(
            "Only one hero section instance is allowed.".into(),
        )));
    }

    let section = HeroRepo::create(&state.pool, &input).await?;

    tracing::info!(hero_id = section.id, user_id = admin.user_id, "Hero section created");

    Ok((StatusCode::CREATED, Json(section)))
}

/// GET /api/v1/hero/admin/{id}
pub async fn get(
    RequireSuperuser(_admin): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<HeroSection>> {
    let section = HeroRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("HeroSection", id)))?;
    Ok(Json(section))
}

/// PUT /api/v1/hero/admin/{id}
pub async fn update(
    RequireSuperuser(admin): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateHeroSection>,
) -> AppResult<Json<HeroSection>> {
    validate_dto(&input)?;

    let section = HeroRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("HeroSection", id)))?;

    tracing::info!(hero_id = id, user_id = admin.user_id, "Hero section updated");

    Ok(Json(section))
}

/// DELETE /api/v1/hero/admin/{id}
pub async fn delete(
    RequireSuperuser(admin): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = HeroRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("HeroSection", id)));
    }

    tracing::info!(hero_id = id, user_id = admin.user_id, "Hero section deleted");

    Ok(StatusCode::NO_CONTENT)
}
