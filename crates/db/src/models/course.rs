//! Course entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vedic_core::types::{DbId, Timestamp};

use crate::models::lecture::Lecture;
use crate::models::{empty_as_none, InstructorSummary};

/// A course row from the `courses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub instructor_id: DbId,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub duration: Option<String>,
    pub thumbnail: Option<String>,
    /// Denormalized enrollment counter, maintained by enrollment.
    pub students: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A course joined with its instructor and live enrollment count.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub course: Course,
    #[sqlx(flatten)]
    pub instructor: InstructorSummary,
    pub enrollment_count: i64,
}

/// A single course with its lectures, returned by `GET /courses/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct CourseDetail {
    #[serde(flatten)]
    pub listing: CourseListing,
    pub lectures: Vec<Lecture>,
}

/// Equality filters for listing courses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseFilter {
    pub category: Option<String>,
    pub difficulty: Option<String>,
    /// Owning instructor id.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub instructor: Option<DbId>,
}

/// DTO for creating a new course. The owner comes from the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourse {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub duration: Option<String>,
    pub thumbnail: Option<String>,
}

/// DTO for updating an existing course. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCourse {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub duration: Option<String>,
    pub thumbnail: Option<String>,
}
