//! Repository for the `events` table.

use async_trait::async_trait;
use sqlx::PgPool;
use vedic_core::catalog::EVENT_STATUS_UPCOMING;
use vedic_core::types::DbId;

use crate::models::event::{CreateEvent, Event, EventFilter, EventListing, UpdateEvent};
use crate::models::INSTRUCTOR_COLUMNS;
use crate::repositories::filter::EqFilters;
use crate::repositories::resource::{ResourceRepo, ResourceSchema};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, event_type, date, time, location, description, instructor_id, \
                       attendees, max_attendees, status, created_at, updated_at";

/// Provides CRUD operations for scheduled events.
pub struct EventRepo;

impl EventRepo {
    pub(crate) fn listing_select() -> String {
        format!(
            "SELECT ev.id, ev.title, ev.event_type, ev.date, ev.time, ev.location, \
                    ev.description, ev.instructor_id, ev.attendees, ev.max_attendees, \
                    ev.status, ev.created_at, ev.updated_at, \
                    {INSTRUCTOR_COLUMNS} \
             FROM events ev \
             LEFT JOIN profiles p ON p.id = ev.instructor_id"
        )
    }

    /// Soonest date first. `time` is free-form text, so same-day events keep
    /// creation order.
    pub(crate) const ORDER_BY: &'static str = "ORDER BY ev.date ASC, ev.id ASC";
}

#[async_trait]
impl ResourceRepo for EventRepo {
    const SCHEMA: ResourceSchema = ResourceSchema {
        table: "events",
        entity: "Event",
        owner_column: "instructor_id",
    };

    type Row = Event;
    type Listing = EventListing;
    type Detail = EventListing;
    type Filter = EventFilter;
    type Create = CreateEvent;
    type Update = UpdateEvent;

    async fn list(pool: &PgPool, filter: &EventFilter) -> Result<Vec<EventListing>, sqlx::Error> {
        let filters = EqFilters::new()
            .text("ev.event_type", filter.event_type.as_deref())
            .text("ev.status", filter.status.as_deref())
            .id("ev.instructor_id", filter.instructor);

        let query = format!(
            "{} {} {}",
            Self::listing_select(),
            filters.where_clause(),
            Self::ORDER_BY
        );
        filters
            .bind(sqlx::query_as::<_, EventListing>(&query))
            .fetch_all(pool)
            .await
    }

    async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<EventListing>, sqlx::Error> {
        let query = format!("{} WHERE ev.id = $1", Self::listing_select());
        sqlx::query_as::<_, EventListing>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert an event in the `upcoming` state with no attendees.
    async fn create(pool: &PgPool, owner_id: DbId, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events \
                (title, event_type, date, time, location, description, max_attendees, \
                 instructor_id, attendees, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 0, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.title)
            .bind(&input.event_type)
            .bind(input.date)
            .bind(&input.time)
            .bind(&input.location)
            .bind(&input.description)
            .bind(input.max_attendees)
            .bind(owner_id)
            .bind(EVENT_STATUS_UPCOMING)
            .fetch_one(pool)
            .await
    }

    async fn update(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET
                title = COALESCE($3, title),
                event_type = COALESCE($4, event_type),
                date = COALESCE($5, date),
                time = COALESCE($6, time),
                location = COALESCE($7, location),
                description = COALESCE($8, description),
                max_attendees = COALESCE($9, max_attendees),
                status = COALESCE($10, status),
                updated_at = NOW()
             WHERE id = $1 AND instructor_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.title)
            .bind(&input.event_type)
            .bind(input.date)
            .bind(&input.time)
            .bind(&input.location)
            .bind(&input.description)
            .bind(input.max_attendees)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }
}
