//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - Listing structs joining owner display fields and parent titles
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod course;
pub mod dashboard;
pub mod document;
pub mod enrollment;
pub mod event;
pub mod lecture;
pub mod live_session;
pub mod profile;
pub mod session;
pub mod user;

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// Owner display fields joined from `profiles` onto content listings.
///
/// All fields are optional because the join is a `LEFT JOIN`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InstructorSummary {
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
}

/// Columns selected for [`InstructorSummary`], assuming `profiles` is aliased `p`.
pub const INSTRUCTOR_COLUMNS: &str = "p.full_name, p.avatar_url, p.bio";

/// Deserialize an optional query value, treating an empty string as absent.
///
/// Used on id filters so `?courseId=` lists everything instead of failing
/// to parse. Pair with `#[serde(default)]`.
pub(crate) fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vedic_core::types::DbId;

    #[derive(Debug, Deserialize)]
    struct IdQuery {
        #[serde(default, deserialize_with = "empty_as_none")]
        id: Option<DbId>,
    }

    fn parse(json: &str) -> Result<IdQuery, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn empty_value_is_absent() {
        assert_eq!(parse(r#"{"id": ""}"#).unwrap().id, None);
        assert_eq!(parse(r#"{"id": "  "}"#).unwrap().id, None);
    }

    #[test]
    fn missing_value_is_absent() {
        assert_eq!(parse("{}").unwrap().id, None);
    }

    #[test]
    fn numeric_value_is_parsed() {
        assert_eq!(parse(r#"{"id": "42"}"#).unwrap().id, Some(42));
    }

    #[test]
    fn garbage_value_is_rejected() {
        assert!(parse(r#"{"id": "abc"}"#).is_err());
    }
}
