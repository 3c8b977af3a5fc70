//! Route definitions for the `/lectures` resource.

use axum::routing::get;
use axum::Router;
use vedic_db::repositories::LectureRepo;

use crate::handlers::resource;
use crate::state::AppState;

/// Routes mounted at `/lectures`.
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
            get(resource::list::<LectureRepo>).post(resource::create::<LectureRepo>),
        )
        .route(
            "/{id}",
            get(resource::get_by_id::<LectureRepo>)
                .put(resource::update::<LectureRepo>)
                .delete(resource::delete::<LectureRepo>),
        )
}
