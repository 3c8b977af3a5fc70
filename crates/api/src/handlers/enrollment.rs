//! Handlers for `/enrollments`.

use axum::extract::State;
use axum::http::StatusCode;
use vedic_core::error::CoreError;
use vedic_db::models::enrollment::{
    CreateEnrollment, EnrollOutcome, Enrollment, EnrollmentListing,
};
use vedic_db::repositories::EnrollmentRepo;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/enrollments
///
/// Enroll the caller in a course. Enrolling twice is rejected and leaves the
/// course's student counter unchanged.
pub async fn enroll(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateEnrollment>,
) -> AppResult<(StatusCode, Json<Enrollment>)> {
    match EnrollmentRepo::enroll(&state.pool, user.user_id, input.course_id).await? {
        EnrollOutcome::Enrolled(enrollment) => {
            tracing::info!(
                student_id = user.user_id,
                course_id = input.course_id,
                "Student enrolled"
            );
            Ok((StatusCode::CREATED, Json(enrollment)))
        }
        EnrollOutcome::AlreadyEnrolled => Err(AppError::BadRequest(
            "Already enrolled in this course".into(),
        )),
        EnrollOutcome::CourseNotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id: input.course_id,
        })),
    }
}

/// GET /api/enrollments
pub async fn list_mine(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<EnrollmentListing>>> {
    let rows = EnrollmentRepo::list_for_student(&state.pool, user.user_id).await?;
    Ok(Json(rows))
}
