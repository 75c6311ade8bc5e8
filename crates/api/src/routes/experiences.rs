//! Route definitions for experiences.
//!
//! ```text
//! GET    /      -> list_experiences (public)
//! POST   /      -> create_experience (auth)
//! DELETE /      -> delete_all_experiences (auth)
//! GET    /{id}  -> get_experience (public)
//! PUT    /{id}  -> update_experience (auth)
//! DELETE /{id}  -> delete_experience (auth)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::experiences;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(experiences::list_experiences)
                .post(experiences::create_experience)
                .delete(experiences::delete_all_experiences),
        )
        .route(
            "/{id}",
            get(experiences::get_experience)
                .put(experiences::update_experience)
                .delete(experiences::delete_experience),
        )
}
