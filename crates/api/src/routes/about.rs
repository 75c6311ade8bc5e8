//! Route definitions for the about section.
//!
//! ```text
//! GET  /      -> public_get (public)
//! POST /      -> create (superuser; singleton)
//! PUT  /{id}  -> update (superuser)
//! ```

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::about;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(about::public_get).post(about::create))
        .route("/{id}", put(about::update))
}
