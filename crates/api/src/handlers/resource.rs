//! Generic handlers for instructor-owned resources.
//!
//! One set of list / get / create / update / delete handlers serves courses,
//! lectures, documents, events and live sessions; each route instantiates
//! them with the resource's repository, e.g. `get(list::<CourseRepo>)`.

use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;
use vedic_core::error::CoreError;
use vedic_core::ownership::check_owner_lookup;
use vedic_core::types::DbId;
use vedic_db::repositories::resource::{delete_owned, find_owner};
use vedic_db::repositories::{CourseRepo, ResourceRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{Json, Path, Query};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireInstructor;
use crate::state::AppState;

/// Body returned by a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// GET /api/{resource}
///
/// Every present query filter becomes an equality predicate.
pub async fn list<R: ResourceRepo>(
    State(state): State<AppState>,
    Query(filter): Query<R::Filter>,
) -> AppResult<Json<Vec<R::Listing>>> {
    let rows = R::list(&state.pool, &filter).await?;
    Ok(Json(rows))
}

/// GET /api/{resource}/{id}
pub async fn get_by_id<R: ResourceRepo>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<R::Detail>> {
    let row = R::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: R::SCHEMA.entity,
            id,
        }))?;
    Ok(Json(row))
}

/// POST /api/{resource}
///
/// The caller becomes the owner. Content attached to a course additionally
/// requires owning that course.
pub async fn create<R: ResourceRepo>(
    State(state): State<AppState>,
    RequireInstructor(user): RequireInstructor,
    Json(input): Json<R::Create>,
) -> AppResult<(StatusCode, Json<R::Row>)> {
    if let Some(course_id) = R::parent_course_id(&input) {
        let owner = find_owner(&state.pool, &CourseRepo::SCHEMA, course_id).await?;
        check_owner_lookup(CourseRepo::SCHEMA.entity, course_id, owner, user.user_id)?;
    }

    let row = R::create(&state.pool, user.user_id, &input).await?;
    tracing::info!(
        resource = R::SCHEMA.table,
        owner_id = user.user_id,
        "Resource created"
    );
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/{resource}/{id}
///
/// Only the recorded owner may update; absent fields are left unchanged.
pub async fn update<R: ResourceRepo>(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<R::Update>,
) -> AppResult<Json<R::Row>> {
    let owner = find_owner(&state.pool, &R::SCHEMA, id).await?;
    check_owner_lookup(R::SCHEMA.entity, id, owner, user.user_id)?;

    // The row can vanish between the owner check and the update.
    let row = R::update(&state.pool, id, user.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: R::SCHEMA.entity,
            id,
        }))?;
    Ok(Json(row))
}

/// DELETE /api/{resource}/{id}
pub async fn delete<R: ResourceRepo>(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeleteResponse>> {
    let owner = find_owner(&state.pool, &R::SCHEMA, id).await?;
    check_owner_lookup(R::SCHEMA.entity, id, owner, user.user_id)?;

    if !delete_owned(&state.pool, &R::SCHEMA, id, user.user_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: R::SCHEMA.entity,
            id,
        }));
    }

    tracing::info!(resource = R::SCHEMA.table, id, "Resource deleted");
    Ok(Json(DeleteResponse {
        message: format!("{} deleted successfully", R::SCHEMA.entity),
    }))
}
