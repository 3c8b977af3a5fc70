//! Role-conditioned dashboard statistics.

use sqlx::PgPool;
use vedic_core::catalog::{
    DASHBOARD_UPCOMING_LIMIT, EVENT_STATUS_UPCOMING, SESSION_STATUS_COMPLETED,
};
use vedic_core::types::DbId;

use crate::models::dashboard::{InstructorDashboard, StudentDashboard};
use crate::models::event::EventListing;
use crate::repositories::event_repo::EventRepo;

/// Computes dashboard statistics in SQL.
pub struct DashboardRepo;

impl DashboardRepo {
    pub async fn student(pool: &PgPool, student_id: DbId) -> Result<StudentDashboard, sqlx::Error> {
        let enrolled_courses: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM enrollments WHERE student_id = $1")
                .bind(student_id)
                .fetch_one(pool)
                .await?;

        let upcoming_events: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM events WHERE status = $1 AND date >= CURRENT_DATE",
        )
        .bind(EVENT_STATUS_UPCOMING)
        .fetch_one(pool)
        .await?;

        let next_events = Self::next_events(pool, None).await?;

        Ok(StudentDashboard {
            enrolled_courses,
            upcoming_events,
            next_events,
        })
    }

    pub async fn instructor(
        pool: &PgPool,
        instructor_id: DbId,
    ) -> Result<InstructorDashboard, sqlx::Error> {
        let (active_courses, total_students): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), COALESCE(SUM(students), 0)::BIGINT \
             FROM courses WHERE instructor_id = $1",
        )
        .bind(instructor_id)
        .fetch_one(pool)
        .await?;

        let live_sessions: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM live_sessions WHERE instructor_id = $1 AND status <> $2",
        )
        .bind(instructor_id)
        .bind(SESSION_STATUS_COMPLETED)
        .fetch_one(pool)
        .await?;

        let upcoming_events: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM events \
             WHERE instructor_id = $1 AND status = $2 AND date >= CURRENT_DATE",
        )
        .bind(instructor_id)
        .bind(EVENT_STATUS_UPCOMING)
        .fetch_one(pool)
        .await?;

        let next_events = Self::next_events(pool, Some(instructor_id)).await?;

        Ok(InstructorDashboard {
            active_courses,
            total_students,
            live_sessions,
            upcoming_events,
            next_events,
        })
    }

    /// The soonest upcoming events, optionally restricted to one instructor.
    async fn next_events(
        pool: &PgPool,
        instructor_id: Option<DbId>,
    ) -> Result<Vec<EventListing>, sqlx::Error> {
        let query = format!(
            "{} WHERE ev.status = $1 AND ev.date >= CURRENT_DATE \
               AND ($2::BIGINT IS NULL OR ev.instructor_id = $2) \
             {} LIMIT $3",
            EventRepo::listing_select(),
            EventRepo::ORDER_BY
        );
        sqlx::query_as::<_, EventListing>(&query)
            .bind(EVENT_STATUS_UPCOMING)
            .bind(instructor_id)
            .bind(DASHBOARD_UPCOMING_LIMIT)
            .fetch_all(pool)
            .await
    }
}
