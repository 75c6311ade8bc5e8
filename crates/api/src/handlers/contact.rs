//! Handlers for contact messages.
//!
//! All operations, intake included, are superuser-only: the public site
//! submits through a channel that authenticates as the operator.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::contact::{ContactMessage, CreateContactMessage};
use folio_db::repositories::ContactRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::validate_dto;
use crate::middleware::auth::RequireSuperuser;
use crate::state::AppState;

/// POST /api/v1/contact
pub async fn create(
    RequireSuperuser(admin): RequireSuperuser,
    State(state): State<AppState>,
    Json(input): Json<CreateContactMessage>,
) -> AppResult<(StatusCode, Json<ContactMessage>)> {
    validate_dto(&input)?;

    let message = ContactRepo::create(&state.pool, &input).await?;

    tracing::info!(
        message_id = message.id,
        user_id = admin.user_id,
        "Contact message stored",
    );

    Ok((StatusCode::CREATED, Json(message)))
}

/// GET /api/v1/contact
pub async fn list(
    RequireSuperuser(_admin): RequireSuperuser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ContactMessage>>> {
    let messages = ContactRepo::list(&state.pool).await?;
    Ok(Json(messages))
}

/// GET /api/v1/contact/{id}
pub async fn get(
    RequireSuperuser(_admin): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ContactMessage>> {
    let message = ContactRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("ContactMessage", id)))?;
    Ok(Json(message))
}

/// DELETE /api/v1/contact/{id}
pub async fn delete(
    RequireSuperuser(admin): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ContactRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("ContactMessage", id)));
    }

    tracing::info!(message_id = id, user_id = admin.user_id, "Contact message deleted");

    Ok(StatusCode::NO_CONTENT)
}
