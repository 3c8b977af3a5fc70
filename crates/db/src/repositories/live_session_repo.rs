//! Repository for the `live_sessions` table.

use async_trait::async_trait;
use sqlx::PgPool;
use vedic_core::catalog::SESSION_STATUS_UPCOMING;
use vedic_core::types::DbId;

use crate::models::live_session::{
    CreateLiveSession, LiveSession, LiveSessionFilter, LiveSessionListing, UpdateLiveSession,
};
use crate::models::INSTRUCTOR_COLUMNS;
use crate::repositories::filter::EqFilters;
use crate::repositories::resource::{ResourceRepo, ResourceSchema};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, course_id, instructor_id, date, time, duration, \
                       max_participants, participants, meet_link, status, recording_url, \
                       created_at, updated_at";

/// Provides CRUD operations for live classroom sessions.
pub struct LiveSessionRepo;

impl LiveSessionRepo {
    fn listing_select() -> String {
        format!(
            "SELECT ls.id, ls.title, ls.description, ls.course_id, ls.instructor_id, ls.date, \
                    ls.time, ls.duration, ls.max_participants, ls.participants, ls.meet_link, \
                    ls.status, ls.recording_url, ls.created_at, ls.updated_at, \
                    c.title AS course_title, \
                    {INSTRUCTOR_COLUMNS} \
             FROM live_sessions ls \
             LEFT JOIN courses c ON c.id = ls.course_id \
             LEFT JOIN profiles p ON p.id = ls.instructor_id"
        )
    }
}

#[async_trait]
impl ResourceRepo for LiveSessionRepo {
    const SCHEMA: ResourceSchema = ResourceSchema {
        table: "live_sessions",
        entity: "Live session",
        owner_column: "instructor_id",
    };

    type Row = LiveSession;
    type Listing = LiveSessionListing;
    type Detail = LiveSessionListing;
    type Filter = LiveSessionFilter;
    type Create = CreateLiveSession;
    type Update = UpdateLiveSession;

    /// List live sessions, soonest first.
    async fn list(
        pool: &PgPool,
        filter: &LiveSessionFilter,
    ) -> Result<Vec<LiveSessionListing>, sqlx::Error> {
        let filters = EqFilters::new()
            .text("ls.status", filter.status.as_deref())
            .id("ls.course_id", filter.course_id)
            .id("ls.instructor_id", filter.instructor);

        let query = format!(
            "{} {} ORDER BY ls.date ASC, ls.id ASC",
            Self::listing_select(),
            filters.where_clause()
        );
        filters
            .bind(sqlx::query_as::<_, LiveSessionListing>(&query))
            .fetch_all(pool)
            .await
    }

    async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<LiveSessionListing>, sqlx::Error> {
        let query = format!("{} WHERE ls.id = $1", Self::listing_select());
        sqlx::query_as::<_, LiveSessionListing>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateLiveSession,
    ) -> Result<LiveSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO live_sessions \
                (title, description, course_id, instructor_id, date, time, duration, \
                 max_participants, meet_link, participants, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 0, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LiveSession>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.course_id)
            .bind(owner_id)
            .bind(input.date)
            .bind(&input.time)
            .bind(input.duration)
            .bind(input.max_participants)
            .bind(&input.meet_link)
            .bind(SESSION_STATUS_UPCOMING)
            .fetch_one(pool)
            .await
    }

    async fn update(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
        input: &UpdateLiveSession,
    ) -> Result<Option<LiveSession>, sqlx::Error> {
        let query = format!(
            "UPDATE live_sessions SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                date = COALESCE($5, date),
                time = COALESCE($6, time),
                duration = COALESCE($7, duration),
                max_participants = COALESCE($8, max_participants),
                meet_link = COALESCE($9, meet_link),
                status = COALESCE($10, status),
                recording_url = COALESCE($11, recording_url),
                updated_at = NOW()
             WHERE id = $1 AND instructor_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LiveSession>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.date)
            .bind(&input.time)
            .bind(input.duration)
            .bind(input.max_participants)
            .bind(&input.meet_link)
            .bind(&input.status)
            .bind(&input.recording_url)
            .fetch_optional(pool)
            .await
    }

    fn parent_course_id(input: &CreateLiveSession) -> Option<DbId> {
        Some(input.course_id)
    }
}
