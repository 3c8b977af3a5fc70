//! Caller-identity extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`rbac::RequireInstructor`] -- Requires the `instructor` role.

pub mod auth;
pub mod rbac;
