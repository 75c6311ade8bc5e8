//! Handlers for the `/projects` resource.
//!
//! Create and update accept either a JSON body or a multipart form; the
//! [`ProjectInput`] extractor normalizes both. Replace semantics differ
//! from posts on purpose: skills are replaced only when skill data arrived
//! (an explicitly empty list clears the set), media only when files
//! arrived. Writes go behind authentication; reads are public.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use folio_core::error::CoreError;
use folio_core::media::validate_media_count;
use folio_core::types::DbId;
use folio_db::models::project::{CreateProject, ProjectDetail, ProjectListParams};
use folio_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ProjectInput, UploadedImage};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/projects
///
/// Public list with optional `?skill=` and `?search=` filters.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> AppResult<Json<Vec<ProjectDetail>>> {
    let projects = ProjectRepo::list(&state.pool, &params).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectDetail>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project", id)))?;
    Ok(Json(project))
}

/// POST /api/v1/projects
///
/// Create a project from a JSON body or multipart form.
pub async fn create_project(
    auth: AuthUser,
    State(state): State<AppState>,
    input: ProjectInput,
) -> AppResult<(StatusCode, Json<ProjectDetail>)> {
    let title = match input.scalars.title.as_deref() {
        Some(t) if !t.trim().is_empty() => t.to_string(),
        _ => {
            return Err(AppError::Core(CoreError::Validation(
                "title is required".into(),
            )))
        }
    };

    validate_media_count(input.media_files.len()).map_err(AppError::Core)?;

    let media_urls = store_media(&state, &input.media_files).await?;
    let skills = input.skills.unwrap_or_default();

    let create = CreateProject {
        title,
        description: input.scalars.description.unwrap_or_default(),
        github_url: input.scalars.github_url,
        live_url: input.scalars.live_url,
    };
    let detail = ProjectRepo::create(
        &state.pool,
        &create,
        Some(auth.user_id),
        &skills,
        &media_urls,
    )
    .await?;

    tracing::info!(
        project_id = detail.project.id,
        title = %detail.project.title,
        skills = detail.skills_list.len(),
        media = detail.media.len(),
        user_id = auth.user_id,
        "Project created",
    );

    Ok((StatusCode::CREATED, Json(detail)))
}

/// PUT /api/v1/projects/{id}
///
/// Update a project. Scalar fields merge; skills and media follow the
/// replace-only-when-supplied contract described at module level.
pub async fn update_project(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    input: ProjectInput,
) -> AppResult<Json<ProjectDetail>> {
    validate_media_count(input.media_files.len()).map_err(AppError::Core)?;

    let media_urls = store_media(&state, &input.media_files).await?;

    let detail = ProjectRepo::update(
        &state.pool,
        id,
        &input.scalars,
        input.skills.as_deref(),
        &media_urls,
    )
    .await?
    .ok_or_else(|| AppError::Core(CoreError::not_found("Project", id)))?;

    tracing::info!(
        project_id = id,
        skills_replaced = input.skills.is_some(),
        media_replaced = !media_urls.is_empty(),
        user_id = auth.user_id,
        "Project updated",
    );

    Ok(Json(detail))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete_project(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Project", id)));
    }

    tracing::info!(project_id = id, user_id = auth.user_id, "Project deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Persist uploaded media in submission order, returning public URLs.
async fn store_media(
    state: &AppState,
    uploads: &[UploadedImage],
) -> Result<Vec<String>, AppError> {
    let mut urls = Vec::with_capacity(uploads.len());
    for upload in uploads {
        let url = state
            .storage
            .store_image(&upload.file_name, &upload.bytes)
            .await?;
        urls.push(url);
    }
    Ok(urls)
}
