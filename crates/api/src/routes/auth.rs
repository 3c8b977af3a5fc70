//! Route definitions for `/auth`.

use axum::routing::{post, put};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sign-up", post(auth::sign_up))
        .route("/sign-in", post(auth::sign_in))
        .route("/refresh", post(auth::refresh))
        .route("/sign-out", post(auth::sign_out))
        .route("/password", put(auth::change_password))
}
