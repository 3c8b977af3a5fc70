//! Route definitions for the `/documents` resource.

use axum::routing::get;
use axum::Router;
use vedic_db::repositories::DocumentRepo;

use crate::handlers::resource;
use crate::state::AppState;

/// Routes mounted at `/documents`.
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
            get(resource::list::<DocumentRepo>).post(resource::create::<DocumentRepo>),
        )
        .route(
            "/{id}",
            get(resource::get_by_id::<DocumentRepo>)
                .put(resource::update::<DocumentRepo>)
                .delete(resource::delete::<DocumentRepo>),
        )
}
