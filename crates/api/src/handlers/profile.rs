//! Handlers for the caller's own `/profile`.

use axum::extract::State;
use vedic_core::error::CoreError;
use vedic_db::models::profile::{Profile, UpdateProfile};
use vedic_db::repositories::ProfileRepo;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/profile
pub async fn get_mine(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<Profile>> {
    let profile = ProfileRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id: user.user_id,
        }))?;
    Ok(Json(profile))
}

/// PUT /api/profile
pub async fn update_mine(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<Profile>> {
    let profile = ProfileRepo::update(&state.pool, user.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id: user.user_id,
        }))?;
    Ok(Json(profile))
}
