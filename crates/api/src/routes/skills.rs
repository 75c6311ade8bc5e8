//! Route definitions for the skill catalog.
//!
//! ```text
//! GET    /      -> list_skills (public)
//! POST   /      -> create_skill (superuser)
//! DELETE /{id}  -> delete_skill (superuser)
//! ```

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::skills;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(skills::list_skills).post(skills::create_skill))
        .route("/{id}", delete(skills::delete_skill))
}
