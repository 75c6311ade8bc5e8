//! Handlers for the about section. Singleton like the hero.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::about::{About, CreateAbout, UpdateAbout};
use folio_db::repositories::AboutRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::validate_dto;
use crate::middleware::auth::RequireSuperuser;
use crate::state::AppState;

/// GET /api/v1/about
///
/// Public: the about section, when created.
pub async fn public_get(State(state): State<AppState>) -> AppResult<Json<About>> {
    let about = AboutRepo::get(&state.pool)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("About", "default")))?;
    Ok(Json(about))
}

/// POST /api/v1/about
///
/// Create the about section. Fails once one exists.
pub async fn create(
    RequireSuperuser(admin): RequireSuperuser,
    State(state): State<AppState>,
    Json(input): Json<CreateAbout>,
) -> AppResult<(StatusCode, Json<About>)> {
    validate_dto(&input)?;

    if AboutRepo::count(&state.pool).await? > 0 {
        return Err(AppError::Core(CoreError::Validation(
            "Only one about instance is allowed.".into(),
        )));
    }

    let about = AboutRepo::create(&state.pool, &input).await?;

    tracing::info!(about_id = about.id, user_id = admin.user_id, "About section created");

    Ok((StatusCode::CREATED, Json(about)))
}

/// PUT /api/v1/about/{id}
pub async fn update(
    RequireSuperuser(admin): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAbout>,
) -> AppResult<Json<About>> {
    validate_dto(&input)?;

    let about = AboutRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("About", id)))?;

    tracing::info!(about_id = id, user_id = admin.user_id, "About section updated");

    Ok(Json(about))
}
