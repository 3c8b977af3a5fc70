//! Live session entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vedic_core::types::{Date, DbId, Timestamp};

use crate::models::{empty_as_none, InstructorSummary};

/// A live session row from the `live_sessions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LiveSession {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub course_id: DbId,
    pub instructor_id: DbId,
    pub date: Date,
    pub time: Option<String>,
    /// Planned length in minutes.
    pub duration: Option<i32>,
    pub max_participants: Option<i32>,
    pub participants: i32,
    pub meet_link: Option<String>,
    /// Lifecycle status (`upcoming`, `live`, `completed`).
    pub status: String,
    pub recording_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A live session joined with its course title and instructor.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LiveSessionListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub session: LiveSession,
    pub course_title: Option<String>,
    #[sqlx(flatten)]
    pub instructor: InstructorSummary,
}

/// Equality filters for listing live sessions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveSessionFilter {
    pub status: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub course_id: Option<DbId>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub instructor: Option<DbId>,
}

/// DTO for scheduling a live session under a course the caller owns.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLiveSession {
    pub title: String,
    pub description: Option<String>,
    #[serde(alias = "courseId")]
    pub course_id: DbId,
    pub date: Date,
    pub time: Option<String>,
    pub duration: Option<i32>,
    #[serde(alias = "maxParticipants")]
    pub max_participants: Option<i32>,
    #[serde(alias = "meetLink")]
    pub meet_link: Option<String>,
}

/// DTO for updating a live session. Status changes drive its lifecycle.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLiveSession {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<Date>,
    pub time: Option<String>,
    pub duration: Option<i32>,
    #[serde(alias = "maxParticipants")]
    pub max_participants: Option<i32>,
    #[serde(alias = "meetLink")]
    pub meet_link: Option<String>,
    pub status: Option<String>,
    #[serde(alias = "recordingUrl")]
    pub recording_url: Option<String>,
}
