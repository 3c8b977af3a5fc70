//! Repository for the `courses` table.

use async_trait::async_trait;
use sqlx::PgPool;
use vedic_core::types::DbId;

use crate::models::course::{
    Course, CourseDetail, CourseFilter, CourseListing, CreateCourse, UpdateCourse,
};
use crate::models::INSTRUCTOR_COLUMNS;
use crate::repositories::filter::EqFilters;
use crate::repositories::lecture_repo::LectureRepo;
use crate::repositories::resource::{ResourceRepo, ResourceSchema};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, instructor_id, category, difficulty, \
                       duration, thumbnail, students, created_at, updated_at";

/// Provides CRUD operations for courses.
pub struct CourseRepo;

impl CourseRepo {
    fn listing_select() -> String {
        format!(
            "SELECT c.id, c.title, c.description, c.instructor_id, c.category, c.difficulty, \
                    c.duration, c.thumbnail, c.students, c.created_at, c.updated_at, \
                    {INSTRUCTOR_COLUMNS}, \
                    (SELECT COUNT(*) FROM enrollments e WHERE e.course_id = c.id) AS enrollment_count \
             FROM courses c \
             LEFT JOIN profiles p ON p.id = c.instructor_id"
        )
    }

    /// Find a plain course row by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a course joined with its instructor and enrollment count.
    pub async fn find_listing(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CourseListing>, sqlx::Error> {
        let query = format!("{} WHERE c.id = $1", Self::listing_select());
        sqlx::query_as::<_, CourseListing>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

#[async_trait]
impl ResourceRepo for CourseRepo {
    const SCHEMA: ResourceSchema = ResourceSchema {
        table: "courses",
        entity: "Course",
        owner_column: "instructor_id",
    };

    type Row = Course;
    type Listing = CourseListing;
    type Detail = CourseDetail;
    type Filter = CourseFilter;
    type Create = CreateCourse;
    type Update = UpdateCourse;

    /// List courses, newest first.
    async fn list(pool: &PgPool, filter: &CourseFilter) -> Result<Vec<CourseListing>, sqlx::Error> {
        let filters = EqFilters::new()
            .text("c.category", filter.category.as_deref())
            .text("c.difficulty", filter.difficulty.as_deref())
            .id("c.instructor_id", filter.instructor);

        let query = format!(
            "{} {} ORDER BY c.created_at DESC, c.id DESC",
            Self::listing_select(),
            filters.where_clause()
        );
        filters
            .bind(sqlx::query_as::<_, CourseListing>(&query))
            .fetch_all(pool)
            .await
    }

    /// Course with instructor (including bio), enrollment count, and lectures.
    async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<CourseDetail>, sqlx::Error> {
        let Some(listing) = Self::find_listing(pool, id).await? else {
            return Ok(None);
        };
        let lectures = LectureRepo::list_by_course(pool, id).await?;
        Ok(Some(CourseDetail { listing, lectures }))
    }

    async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateCourse,
    ) -> Result<Course, sqlx::Error> {
        let query = format!(
            "INSERT INTO courses \
                (title, description, instructor_id, category, difficulty, duration, thumbnail, students) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, 0) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(owner_id)
            .bind(&input.category)
            .bind(&input.difficulty)
            .bind(&input.duration)
            .bind(&input.thumbnail)
            .fetch_one(pool)
            .await
    }

    async fn update(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
        input: &UpdateCourse,
    ) -> Result<Option<Course>, sqlx::Error> {
        let query = format!(
            "UPDATE courses SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                category = COALESCE($5, category),
                difficulty = COALESCE($6, difficulty),
                duration = COALESCE($7, duration),
                thumbnail = COALESCE($8, thumbnail),
                updated_at = NOW()
             WHERE id = $1 AND instructor_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.difficulty)
            .bind(&input.duration)
            .bind(&input.thumbnail)
            .fetch_optional(pool)
            .await
    }
}
