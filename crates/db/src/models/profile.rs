//! Profile model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vedic_core::types::{DbId, Timestamp};

/// A profile row from the `profiles` table. `id` equals the user id.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub full_name: String,
    /// `student` or `instructor`.
    pub role: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating the profile that accompanies a new user.
#[derive(Debug, Clone)]
pub struct CreateProfile {
    pub user_id: DbId,
    pub full_name: String,
    pub role: String,
}

/// DTO for `PUT /profile`. The role is not editable here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfile {
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}
