//! Route definitions for projects.
//!
//! ```text
//! GET    /      -> list_projects (public; ?skill= ?search=)
//! POST   /      -> create_project (auth; JSON or multipart)
//! GET    /{id}  -> get_project (public)
//! PUT    /{id}  -> update_project (auth; JSON or multipart)
//! DELETE /{id}  -> delete_project (auth)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/{id}",
            get(projects::get_project)
                .put(projects::update_project)
                .delete(projects::delete_project),
        )
}
