//! Route definitions for user profile and password flows.
//!
//! ```text
//! GET  /me                      -> get_profile
//! PUT  /me                      -> update_profile
//! POST /change-password         -> change_password
//! POST /password-reset          -> password_reset_request (superuser)
//! POST /password-reset-confirm  -> password_reset_confirm (superuser)
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me", get(users::get_profile).put(users::update_profile))
        .route("/change-password", post(users::change_password))
        .route("/password-reset", post(users::password_reset_request))
        .route(
            "/password-reset-confirm",
            post(users::password_reset_confirm),
        )
}
