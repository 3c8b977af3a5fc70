//! Lecture entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vedic_core::types::{DbId, Timestamp};

use crate::models::{empty_as_none, InstructorSummary};

/// A lecture row from the `lectures` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Lecture {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub course_id: DbId,
    pub instructor_id: DbId,
    pub duration: Option<String>,
    pub video_url: Option<String>,
    pub thumbnail: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub views: i32,
    pub upload_date: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A lecture joined with its course title and instructor.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LectureListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub lecture: Lecture,
    pub course_title: Option<String>,
    #[sqlx(flatten)]
    pub instructor: InstructorSummary,
}

/// Equality filters for listing lectures.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LectureFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub course_id: Option<DbId>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub instructor: Option<DbId>,
}

/// DTO for creating a new lecture under a course the caller owns.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLecture {
    pub title: String,
    pub description: Option<String>,
    #[serde(alias = "courseId")]
    pub course_id: DbId,
    pub duration: Option<String>,
    #[serde(alias = "videoUrl")]
    pub video_url: Option<String>,
    pub thumbnail: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
}

/// DTO for updating an existing lecture. The parent course cannot change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLecture {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    #[serde(alias = "videoUrl")]
    pub video_url: Option<String>,
    pub thumbnail: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
}
