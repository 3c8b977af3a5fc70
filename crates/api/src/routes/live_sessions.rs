//! Route definitions for the `/live-sessions` resource.

use axum::routing::get;
use axum::Router;
use vedic_db::repositories::LiveSessionRepo;

use crate::handlers::resource;
use crate::state::AppState;

/// Routes mounted at `/live-sessions`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(resource::list::<LiveSessionRepo>).post(resource::create::<LiveSessionRepo>),
        )
        .route(
            "/{id}",
            get(resource::get_by_id::<LiveSessionRepo>)
                .put(resource::update::<LiveSessionRepo>)
                .delete(resource::delete::<LiveSessionRepo>),
        )
}
