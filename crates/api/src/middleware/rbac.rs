//! Role-based access control extractors.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use vedic_core::error::CoreError;
use vedic_core::roles::is_instructor;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `instructor` role. Rejects with 403 Forbidden otherwise.
///
/// Authoring courses, lectures, documents, events and live sessions goes
/// through this extractor.
///
/// ```ignore
/// async fn author(RequireInstructor(user): RequireInstructor) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireInstructor(pub AuthUser);

impl FromRequestParts<AppState> for RequireInstructor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !is_instructor(&user.role) {
            return Err(AppError::Core(CoreError::Forbidden(
                "Instructor role required".into(),
            )));
        }
        Ok(RequireInstructor(user))
    }
}
