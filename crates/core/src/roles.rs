//! Well-known role name constants.
//!
//! These must match the CHECK constraint on `profiles.role` in
//! `20260301000002_create_profiles_table.sql`.

use crate::error::CoreError;

pub const ROLE_STUDENT: &str = "student";
pub const ROLE_INSTRUCTOR: &str = "instructor";

/// All assignable roles.
pub const VALID_ROLES: &[&str] = &[ROLE_STUDENT, ROLE_INSTRUCTOR];

/// Role given to new accounts that do not ask for one.
pub const DEFAULT_ROLE: &str = ROLE_STUDENT;

/// Validate that a role string is one of the known roles.
pub fn validate_role(role: &str) -> Result<(), CoreError> {
    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown role: '{role}'. Valid roles: {}",
            VALID_ROLES.join(", ")
        )))
    }
}

/// Whether the role may author courses and course content.
pub fn is_instructor(role: &str) -> bool {
    role == ROLE_INSTRUCTOR
}
