//! Route definitions for the `/courses` resource.

use axum::routing::get;
use axum::Router;
use vedic_db::repositories::CourseRepo;

use crate::handlers::resource;
use crate::state::AppState;

/// Routes mounted at `/courses`.
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
            get(resource::list::<CourseRepo>).post(resource::create::<CourseRepo>),
        )
        .route(
            "/{id}",
            get(resource::get_by_id::<CourseRepo>)
                .put(resource::update::<CourseRepo>)
                .delete(resource::delete::<CourseRepo>),
        )
}
