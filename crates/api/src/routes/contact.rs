//! Route definitions for contact messages. Superuser-only, intake included.
//!
//! ```text
//! POST   /      -> create
//! GET    /      -> list
//! GET    /{id}  -> get
//! DELETE /{id}  -> delete
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(contact::list).post(contact::create))
        .route("/{id}", get(contact::get).delete(contact::delete))
}
