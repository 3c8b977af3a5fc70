//! Handler for the role-conditioned `/dashboard`.

use axum::extract::State;
use vedic_core::roles::is_instructor;
use vedic_db::models::dashboard::Dashboard;
use vedic_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Dashboard>> {
    let dashboard = if is_instructor(&user.role) {
        Dashboard::Instructor(DashboardRepo::instructor(&state.pool, user.user_id).await?)
    } else {
        Dashboard::Student(DashboardRepo::student(&state.pool, user.user_id).await?)
    };
    Ok(Json(dashboard))
}
