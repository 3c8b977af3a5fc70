pub mod auth;
pub mod courses;
pub mod documents;
pub mod enrollments;
pub mod events;
pub mod health;
pub mod lectures;
pub mod live_sessions;
pub mod profile;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/sign-up                                    create account (public)
/// /auth/sign-in                                    sign in (public)
/// /auth/refresh                                    rotate refresh token (public)
/// /auth/sign-out                                   revoke sessions (auth)
/// /auth/password                                   change password (auth, PUT)
///
/// /courses                                         list, create (instructor)
/// /courses/{id}                                    get, update, delete (owner)
/// /lectures                                        list, create (instructor)
/// /lectures/{id}                                   get, update, delete (owner)
/// /documents                                       list, create (instructor)
/// /documents/{id}                                  get, update, delete (owner)
/// /events                                          list, create (instructor)
/// /events/{id}                                     get, update, delete (owner)
/// /live-sessions                                   list, create (instructor)
/// /live-sessions/{id}                              get, update, delete (owner)
///
/// /enrollments                                     list mine, enroll (auth)
/// /profile                                         get, update mine (auth)
/// /dashboard                                       role statistics (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/courses", courses::router())
        .nest("/lectures", lectures::router())
        .nest("/documents", documents::router())
        .nest("/events", events::router())
        .nest("/live-sessions", live_sessions::router())
        .nest("/enrollments", enrollments::router())
        .nest("/profile", profile::router())
        .route("/dashboard", get(handlers::dashboard::get_dashboard))
}
