//! Route definitions for blog posts. Posts are addressed by slug.
//!
//! ```text
//! GET    /        -> list_posts (public)
//! POST   /        -> create_post (superuser, multipart)
//! GET    /{slug}  -> get_post (public)
//! PUT    /{slug}  -> update_post (superuser, multipart)
//! DELETE /{slug}  -> delete_post (superuser)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::posts;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::list_posts).post(posts::create_post))
        .route(
            "/{slug}",
            get(posts::get_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
}
