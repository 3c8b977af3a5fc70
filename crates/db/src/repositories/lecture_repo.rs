//! Repository for the `lectures` table.

use async_trait::async_trait;
use sqlx::PgPool;
use vedic_core::types::DbId;

use crate::models::lecture::{CreateLecture, Lecture, LectureFilter, LectureListing, UpdateLecture};
use crate::models::INSTRUCTOR_COLUMNS;
use crate::repositories::filter::EqFilters;
use crate::repositories::resource::{ResourceRepo, ResourceSchema};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, course_id, instructor_id, duration, video_url, \
                       thumbnail, category, difficulty, views, upload_date, created_at, updated_at";

/// Provides CRUD operations for lectures.
pub struct LectureRepo;

impl LectureRepo {
    fn listing_select() -> String {
        format!(
            "SELECT l.id, l.title, l.description, l.course_id, l.instructor_id, l.duration, \
                    l.video_url, l.thumbnail, l.category, l.difficulty, l.views, l.upload_date, \
                    l.created_at, l.updated_at, \
                    c.title AS course_title, \
                    {INSTRUCTOR_COLUMNS} \
             FROM lectures l \
             LEFT JOIN courses c ON c.id = l.course_id \
             LEFT JOIN profiles p ON p.id = l.instructor_id"
        )
    }

    /// All lectures of a course, newest upload first.
    pub async fn list_by_course(pool: &PgPool, course_id: DbId) -> Result<Vec<Lecture>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM lectures WHERE course_id = $1 \
             ORDER BY upload_date DESC, id DESC"
        );
        sqlx::query_as::<_, Lecture>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }
}

#[async_trait]
impl ResourceRepo for LectureRepo {
    const SCHEMA: ResourceSchema = ResourceSchema {
        table: "lectures",
        entity: "Lecture",
        owner_column: "instructor_id",
    };

    type Row = Lecture;
    type Listing = LectureListing;
    type Detail = LectureListing;
    type Filter = LectureFilter;
    type Create = CreateLecture;
    type Update = UpdateLecture;

    /// List lectures, newest upload first.
    async fn list(
        pool: &PgPool,
        filter: &LectureFilter,
    ) -> Result<Vec<LectureListing>, sqlx::Error> {
        let filters = EqFilters::new()
            .id("l.course_id", filter.course_id)
            .text("l.category", filter.category.as_deref())
            .text("l.difficulty", filter.difficulty.as_deref())
            .id("l.instructor_id", filter.instructor);

        let query = format!(
            "{} {} ORDER BY l.upload_date DESC, l.id DESC",
            Self::listing_select(),
            filters.where_clause()
        );
        filters
            .bind(sqlx::query_as::<_, LectureListing>(&query))
            .fetch_all(pool)
            .await
    }

    async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<LectureListing>, sqlx::Error> {
        let query = format!("{} WHERE l.id = $1", Self::listing_select());
        sqlx::query_as::<_, LectureListing>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateLecture,
    ) -> Result<Lecture, sqlx::Error> {
        let query = format!(
            "INSERT INTO lectures \
                (title, description, course_id, instructor_id, duration, video_url, thumbnail, \
                 category, difficulty, views, upload_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 0, NOW()) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lecture>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.course_id)
            .bind(owner_id)
            .bind(&input.duration)
            .bind(&input.video_url)
            .bind(&input.thumbnail)
            .bind(&input.category)
            .bind(&input.difficulty)
            .fetch_one(pool)
            .await
    }

    async fn update(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
        input: &UpdateLecture,
    ) -> Result<Option<Lecture>, sqlx::Error> {
        let query = format!(
            "UPDATE lectures SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                duration = COALESCE($5, duration),
                video_url = COALESCE($6, video_url),
                thumbnail = COALESCE($7, thumbnail),
                category = COALESCE($8, category),
                difficulty = COALESCE($9, difficulty),
                updated_at = NOW()
             WHERE id = $1 AND instructor_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lecture>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.duration)
            .bind(&input.video_url)
            .bind(&input.thumbnail)
            .bind(&input.category)
            .bind(&input.difficulty)
            .fetch_optional(pool)
            .await
    }

    fn parent_course_id(input: &CreateLecture) -> Option<DbId> {
        Some(input.course_id)
    }
}
