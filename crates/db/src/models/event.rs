//! Event entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vedic_core::types::{Date, DbId, Timestamp};

use crate::models::{empty_as_none, InstructorSummary};

/// An event row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub title: String,
    /// Event kind (`lecture`, `workshop`, `exam`, `seminar`).
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub date: Date,
    pub time: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub instructor_id: DbId,
    pub attendees: i32,
    pub max_attendees: Option<i32>,
    /// Lifecycle status (`upcoming`, `completed`, `cancelled`).
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An event joined with its instructor.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub event: Event,
    #[sqlx(flatten)]
    pub instructor: InstructorSummary,
}

/// Equality filters for listing events.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventFilter {
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub instructor: Option<DbId>,
}

/// DTO for scheduling a new event. Status always starts as `upcoming`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub date: Date,
    pub time: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "maxAttendees")]
    pub max_attendees: Option<i32>,
}

/// DTO for updating an existing event. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEvent {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub date: Option<Date>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "maxAttendees")]
    pub max_attendees: Option<i32>,
    pub status: Option<String>,
}
