//! Route definitions for the `/events` resource.

use axum::routing::get;
use axum::Router;
use vedic_db::repositories::EventRepo;

use crate::handlers::resource;
use crate::state::AppState;

/// Routes mounted at `/events`.
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
            get(resource::list::<EventRepo>).post(resource::create::<EventRepo>),
        )
        .route(
            "/{id}",
            get(resource::get_by_id::<EventRepo>)
                .put(resource::update::<EventRepo>)
                .delete(resource::delete::<EventRepo>),
        )
}
