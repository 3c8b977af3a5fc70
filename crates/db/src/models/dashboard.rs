//! Role-conditioned dashboard statistics.

use serde::Serialize;

use crate::models::event::EventListing;

/// Statistics shown to a student.
#[derive(Debug, Clone, Serialize)]
pub struct StudentDashboard {
    pub enrolled_courses: i64,
    /// All upcoming events on the platform.
    pub upcoming_events: i64,
    pub next_events: Vec<EventListing>,
}

/// Statistics shown to an instructor, scoped to what they own.
#[derive(Debug, Clone, Serialize)]
pub struct InstructorDashboard {
    pub active_courses: i64,
    /// Sum of the `students` counter over the instructor's courses.
    pub total_students: i64,
    pub live_sessions: i64,
    pub upcoming_events: i64,
    pub next_events: Vec<EventListing>,
}

/// Dashboard payload, tagged by the caller's role.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Dashboard {
    Student(StudentDashboard),
    Instructor(InstructorDashboard),
}
