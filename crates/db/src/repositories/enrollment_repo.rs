//! Repository for the `enrollments` table.

use sqlx::PgPool;
use vedic_core::types::DbId;

use crate::models::enrollment::{EnrollOutcome, Enrollment, EnrollmentListing};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, student_id, course_id, progress, enrolled_at, created_at, updated_at";

/// Enrolls students and lists their courses.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Enroll a student in a course.
    ///
    /// The course row is locked for the whole transaction, so the duplicate
    /// check, the insert, and the `students` increment cannot interleave with
    /// a concurrent enrollment. The counter moves only when a row is inserted.
    pub async fn enroll(
        pool: &PgPool,
        student_id: DbId,
        course_id: DbId,
    ) -> Result<EnrollOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let locked: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM courses WHERE id = $1 FOR UPDATE")
                .bind(course_id)
                .fetch_optional(&mut *tx)
                .await?;
        if locked.is_none() {
            return Ok(EnrollOutcome::CourseNotFound);
        }

        let query = format!(
            "INSERT INTO enrollments (student_id, course_id, progress)
             VALUES ($1, $2, 0)
             ON CONFLICT (student_id, course_id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, Enrollment>(&query)
            .bind(student_id)
            .bind(course_id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(enrollment) = inserted else {
            return Ok(EnrollOutcome::AlreadyEnrolled);
        };

        sqlx::query("UPDATE courses SET students = students + 1 WHERE id = $1")
            .bind(course_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(EnrollOutcome::Enrolled(enrollment))
    }

    /// A student's enrollments, newest first, each with its course summary.
    pub async fn list_for_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<EnrollmentListing>, sqlx::Error> {
        sqlx::query_as::<_, EnrollmentListing>(
            "SELECT e.id, e.student_id, e.course_id, e.progress, e.enrolled_at, \
                    e.created_at, e.updated_at, \
                    c.title AS course_title, c.description AS course_description, \
                    c.category AS course_category, c.difficulty AS course_difficulty, \
                    c.thumbnail AS course_thumbnail, c.duration AS course_duration, \
                    p.full_name AS instructor_name, p.avatar_url AS instructor_avatar_url \
             FROM enrollments e \
             JOIN courses c ON c.id = e.course_id \
             LEFT JOIN profiles p ON p.id = c.instructor_id \
             WHERE e.student_id = $1 \
             ORDER BY e.enrolled_at DESC, e.id DESC",
        )
        .bind(student_id)
        .fetch_all(pool)
        .await
    }
}
