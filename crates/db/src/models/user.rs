//! User credential model and DTOs.

use sqlx::FromRow;
use vedic_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
///
/// Contains the password hash -- never serialize this to API responses.
/// Display data lives in [`Profile`](crate::models::profile::Profile).
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user.
#[derive(Debug)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
}

/// A user joined with the profile fields needed to issue tokens.
#[derive(Debug, Clone, FromRow)]
pub struct UserWithProfile {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub role: String,
}
