//! Repository for the `users` table.

use sqlx::PgPool;
use vedic_core::types::DbId;

use crate::models::profile::CreateProfile;
use crate::models::user::{CreateUser, User, UserWithProfile};
use crate::repositories::profile_repo::ProfileRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, password_hash, created_at, updated_at";

/// Columns for a user joined with its profile (`u` and `p` aliases).
const WITH_PROFILE_COLUMNS: &str = "u.id, u.email, u.password_hash, p.full_name, p.role";

/// Provides credential storage for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a user and its profile in one transaction.
    ///
    /// `role` must already be validated; the `profiles` CHECK rejects
    /// anything else and nothing is written.
    pub async fn create_with_profile(
        pool: &PgPool,
        input: &CreateUser,
        full_name: &str,
        role: &str,
    ) -> Result<UserWithProfile, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO users (email, password_hash)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.password_hash)
            .fetch_one(&mut *tx)
            .await?;

        let profile = ProfileRepo::create(
            &mut tx,
            &CreateProfile {
                user_id: user.id,
                full_name: full_name.to_string(),
                role: role.to_string(),
            },
        )
        .await?;

        tx.commit().await?;

        Ok(UserWithProfile {
            id: user.id,
            email: user.email,
            password_hash: user.password_hash,
            full_name: profile.full_name,
            role: profile.role,
        })
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email, joined with the profile fields used for tokens.
    pub async fn find_with_profile_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<UserWithProfile>, sqlx::Error> {
        let query = format!(
            "SELECT {WITH_PROFILE_COLUMNS} FROM users u \
             JOIN profiles p ON p.id = u.id \
             WHERE u.email = $1"
        );
        sqlx::query_as::<_, UserWithProfile>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by ID, joined with the profile fields used for tokens.
    pub async fn find_with_profile_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<UserWithProfile>, sqlx::Error> {
        let query = format!(
            "SELECT {WITH_PROFILE_COLUMNS} FROM users u \
             JOIN profiles p ON p.id = u.id \
             WHERE u.id = $1"
        );
        sqlx::query_as::<_, UserWithProfile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a user's password hash. Returns `true` if the row was updated.
    pub async fn update_password(
        pool: &PgPool,
        id: DbId,
        password_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE users SET password_hash = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(password_hash)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
