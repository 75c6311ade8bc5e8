pub mod about;
pub mod auth;
pub mod contact;
pub mod experiences;
pub mod health;
pub mod hero;
pub mod posts;
pub mod projects;
pub mod skills;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                          login (public)
/// /auth/refresh                        refresh (public)
/// /auth/logout                         logout (requires auth)
///
/// /users/me                            get, update profile
/// /users/change-password               change password
/// /users/password-reset                request reset mail (superuser)
/// /users/password-reset-confirm        confirm reset (superuser)
///
/// /posts                               list (public), create (superuser)
/// /posts/{slug}                        get (public), update, delete
///
/// /projects                            list (public), create (auth)
/// /projects/{id}                       get (public), update, delete
///
/// /experiences                         list (public), create, delete-all
/// /experiences/{id}                    get (public), update, delete
///
/// /skills                              list (public), create (superuser)
/// /skills/{id}                         delete (superuser)
///
/// /hero                                active sections (public)
/// /hero/admin                          list, create (superuser)
/// /hero/admin/{id}                     get, update, delete (superuser)
///
/// /about                               get (public), create (superuser)
/// /about/{id}                          update (superuser)
///
/// /contact                             create, list (superuser)
/// /contact/{id}                        get, delete (superuser)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/posts", posts::router())
        .nest("/projects", projects::router())
        .nest("/experiences", experiences::router())
        .nest("/skills", skills::router())
        .nest("/hero", hero::router())
        .nest("/about", about::router())
        .nest("/contact", contact::router())
}
