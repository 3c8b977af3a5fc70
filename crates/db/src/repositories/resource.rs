//! Generic access to instructor-owned resources.
//!
//! Courses, lectures, documents, events, and live sessions share one
//! contract: filtered listing, get-one with joined data, owner-stamped
//! create, and owner-restricted update/delete. Each repository describes its
//! table with a [`ResourceSchema`] and implements [`ResourceRepo`]; the API
//! layer drives all five through the same generic handlers.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::PgPool;
use vedic_core::types::DbId;

/// Static description of a resource table.
#[derive(Debug, Clone, Copy)]
pub struct ResourceSchema {
    /// Table name, e.g. `"courses"`.
    pub table: &'static str,
    /// Human-readable entity name used in error messages, e.g. `"Course"`.
    pub entity: &'static str,
    /// Column recording the owning instructor.
    pub owner_column: &'static str,
}

/// CRUD contract for an instructor-owned resource.
#[async_trait]
pub trait ResourceRepo: Send + Sync + 'static {
    const SCHEMA: ResourceSchema;

    /// Plain row returned by create and update.
    type Row: Serialize + Send;
    /// Joined row returned by list.
    type Listing: Serialize + Send;
    /// Joined row returned by get-one.
    type Detail: Serialize + Send;
    /// Equality filters accepted by list.
    type Filter: DeserializeOwned + Send + Sync;
    type Create: DeserializeOwned + Send + Sync;
    type Update: DeserializeOwned + Send + Sync;

    /// List rows matching every present filter, in the resource's fixed order.
    async fn list(pool: &PgPool, filter: &Self::Filter) -> Result<Vec<Self::Listing>, sqlx::Error>;

    /// Fetch one row with joined data.
    async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<Self::Detail>, sqlx::Error>;

    /// Insert a row owned by `owner_id`, with counters at zero.
    async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &Self::Create,
    ) -> Result<Self::Row, sqlx::Error>;

    /// Apply the provided fields to a row owned by `owner_id`.
    ///
    /// Returns `None` if no such row exists for that owner.
    async fn update(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
        input: &Self::Update,
    ) -> Result<Option<Self::Row>, sqlx::Error>;

    /// The course a new row will be attached to, if the resource has one.
    ///
    /// Creating such a row requires owning that course.
    fn parent_course_id(_input: &Self::Create) -> Option<DbId> {
        None
    }
}

/// Look up the owner of a resource row. `None` if the row does not exist.
pub async fn find_owner(
    pool: &PgPool,
    schema: &ResourceSchema,
    id: DbId,
) -> Result<Option<DbId>, sqlx::Error> {
    let query = format!(
        "SELECT {owner} FROM {table} WHERE id = $1",
        owner = schema.owner_column,
        table = schema.table,
    );
    sqlx::query_scalar::<_, DbId>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Delete a resource row owned by `owner_id`. Returns `true` if a row was removed.
pub async fn delete_owned(
    pool: &PgPool,
    schema: &ResourceSchema,
    id: DbId,
    owner_id: DbId,
) -> Result<bool, sqlx::Error> {
    let query = format!(
        "DELETE FROM {table} WHERE id = $1 AND {owner} = $2",
        table = schema.table,
        owner = schema.owner_column,
    );
    let result = sqlx::query(&query)
        .bind(id)
        .bind(owner_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
