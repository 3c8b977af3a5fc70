//! Enrollment model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vedic_core::types::{DbId, Timestamp};

/// An enrollment row from the `enrollments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Enrollment {
    pub id: DbId,
    pub student_id: DbId,
    pub course_id: DbId,
    /// Completion percentage, 0 to 100.
    pub progress: i32,
    pub enrolled_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Course summary embedded in a student's enrollment listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EnrolledCourse {
    #[sqlx(rename = "course_title")]
    pub title: String,
    #[sqlx(rename = "course_description")]
    pub description: Option<String>,
    #[sqlx(rename = "course_category")]
    pub category: Option<String>,
    #[sqlx(rename = "course_difficulty")]
    pub difficulty: Option<String>,
    #[sqlx(rename = "course_thumbnail")]
    pub thumbnail: Option<String>,
    #[sqlx(rename = "course_duration")]
    pub duration: Option<String>,
    pub instructor_name: Option<String>,
    pub instructor_avatar_url: Option<String>,
}

/// An enrollment joined with the course it grants access to.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EnrollmentListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub enrollment: Enrollment,
    #[sqlx(flatten)]
    pub course: EnrolledCourse,
}

/// Request body for `POST /enrollments`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEnrollment {
    #[serde(alias = "courseId")]
    pub course_id: DbId,
}

/// Result of an enrollment attempt.
#[derive(Debug, Clone)]
pub enum EnrollOutcome {
    /// A new enrollment was created and the course counter incremented.
    Enrolled(Enrollment),
    /// The student already holds an enrollment for this course.
    AlreadyEnrolled,
    /// No course exists with the requested id.
    CourseNotFound,
}
