//! Route definitions for the hero section.
//!
//! ```text
//! GET    /            -> public_list (public; active rows only)
//! GET    /admin       -> admin_list (superuser)
//! POST   /admin       -> create (superuser; singleton)
//! GET    /admin/{id}  -> get (superuser)
//! PUT    /admin/{id}  -> update (superuser)
//! DELETE /admin/{id}  -> delete (superuser)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::hero;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(hero::public_list))
        .route("/admin", get(hero::admin_list).post(hero::create))
        .route(
            "/admin/{id}",
            get(hero::get).put(hero::update).delete(hero::delete),
        )
}
