//! Handlers for the `/users` resource: profile, password change, and the
//! password-reset flow.

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::user::{UpdateProfile, UserProfile};
use folio_db::repositories::UserRepo;

use crate::auth::jwt::{generate_opaque_token, hash_opaque_token};
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, RequireSuperuser};
use crate::state::AppState;

/// Reset tokens stay valid for one hour.
const RESET_TOKEN_EXPIRY_MINS: i64 = 60;

/// Neutral response for reset requests: identical whether or not the email
/// is registered, so the endpoint cannot be used to probe accounts.
const RESET_REQUESTED: &str = "If that email is registered, a reset link will be sent.";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /users/change-password`.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

/// Request body for `POST /users/password-reset`.
#[derive(Debug, Deserialize)]
pub struct ResetRequest {
    pub email: String,
}

/// Query parameters for `POST /users/password-reset-confirm`.
#[derive(Debug, Deserialize)]
pub struct ResetConfirmParams {
    pub uid: DbId,
    pub token: String,
}

/// Request body for `POST /users/password-reset-confirm`.
#[derive(Debug, Deserialize)]
pub struct ResetConfirmRequest {
    pub new_password: String,
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// GET /api/v1/users/me
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<UserProfile>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", auth.user_id)))?;
    Ok(Json(UserProfile::from(&user)))
}

/// PUT /api/v1/users/me
///
/// Update the caller's profile fields; only provided fields change.
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<UserProfile>> {
    let user = UserRepo::update_profile(&state.pool, auth.user_id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", auth.user_id)))?;

    tracing::info!(user_id = user.id, "Profile updated");

    Ok(Json(UserProfile::from(&user)))
}

// ---------------------------------------------------------------------------
// Password change
// ---------------------------------------------------------------------------

/// POST /api/v1/users/change-password
///
/// Verify the old password, enforce the strength policy, store a new hash.
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<ChangePasswordRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", auth.user_id)))?;

    let old_valid = verify_password(&input.old_password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !old_valid {
        return Err(AppError::Core(CoreError::Validation(
            "Wrong password.".into(),
        )));
    }

    validate_password_strength(&input.new_password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let new_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    UserRepo::set_password(&state.pool, user.id, &new_hash).await?;

    tracing::info!(user_id = user.id, "Password changed");

    Ok(Json(json!({ "detail": "Password updated successfully." })))
}

// ---------------------------------------------------------------------------
// Password reset
// ---------------------------------------------------------------------------

/// POST /api/v1/users/password-reset
///
/// Issue a reset token and email the reset link. The response never reveals
/// whether the email is registered.
pub async fn password_reset_request(
    RequireSuperuser(_admin): RequireSuperuser,
    State(state): State<AppState>,
    Json(input): Json<ResetRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let Some(user) = UserRepo::find_by_email(&state.pool, &input.email).await? else {
        return Ok(Json(json!({ "detail": RESET_REQUESTED })));
    };

    let (token_plaintext, token_hash) = generate_opaque_token();
    let expires_at = Utc::now() + chrono::Duration::minutes(RESET_TOKEN_EXPIRY_MINS);
    UserRepo::set_reset_token(&state.pool, user.id, &token_hash, expires_at).await?;

    let reset_link = format!(
        "{}/api/v1/users/password-reset-confirm?uid={}&token={}",
        state.config.public_base_url, user.id, token_plaintext
    );

    let mailer = state.mailer.as_ref().ok_or_else(|| {
        AppError::InternalError("Failed to send reset email. Check email configuration.".into())
    })?;

    if let Err(e) = mailer.send_password_reset(&user.email, &reset_link).await {
        tracing::error!(error = %e, user_id = user.id, "Password reset email failed");
        return Err(AppError::InternalError(
            "Failed to send reset email. Check email configuration.".into(),
        ));
    }

    tracing::info!(user_id = user.id, "Password reset email sent");

    Ok(Json(json!({ "detail": RESET_REQUESTED })))
}

/// POST /api/v1/users/password-reset-confirm?uid=..&token=..
///
/// Validate the reset token and set the new password.
pub async fn password_reset_confirm(
    RequireSuperuser(_admin): RequireSuperuser,
    State(state): State<AppState>,
    Query(params): Query<ResetConfirmParams>,
    Json(input): Json<ResetConfirmRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let token_hash = hash_opaque_token(&params.token);

    let user = UserRepo::find_by_reset_token(&state.pool, params.uid, &token_hash)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Validation("Invalid token.".into())))?;

    validate_password_strength(&input.new_password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let new_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    UserRepo::set_password(&state.pool, user.id, &new_hash).await?;

    tracing::info!(user_id = user.id, "Password reset completed");

    Ok(Json(json!({ "detail": "Password has been reset." })))
}
