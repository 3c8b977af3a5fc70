//! Repository for the `documents` table.

use async_trait::async_trait;
use sqlx::PgPool;
use vedic_core::types::DbId;

use crate::models::document::{
    CreateDocument, Document, DocumentFilter, DocumentListing, UpdateDocument,
};
use crate::models::INSTRUCTOR_COLUMNS;
use crate::repositories::filter::EqFilters;
use crate::repositories::resource::{ResourceRepo, ResourceSchema};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, course_id, instructor_id, file_type, size, \
                       file_url, category, difficulty, downloads, upload_date, created_at, updated_at";

/// Provides CRUD operations for course documents.
pub struct DocumentRepo;

impl DocumentRepo {
    fn listing_select() -> String {
        format!(
            "SELECT d.id, d.title, d.description, d.course_id, d.instructor_id, d.file_type, \
                    d.size, d.file_url, d.category, d.difficulty, d.downloads, d.upload_date, \
                    d.created_at, d.updated_at, \
                    c.title AS course_title, \
                    {INSTRUCTOR_COLUMNS} \
             FROM documents d \
             LEFT JOIN courses c ON c.id = d.course_id \
             LEFT JOIN profiles p ON p.id = d.instructor_id"
        )
    }
}

#[async_trait]
impl ResourceRepo for DocumentRepo {
    const SCHEMA: ResourceSchema = ResourceSchema {
        table: "documents",
        entity: "Document",
        owner_column: "instructor_id",
    };

    type Row = Document;
    type Listing = DocumentListing;
    type Detail = DocumentListing;
    type Filter = DocumentFilter;
    type Create = CreateDocument;
    type Update = UpdateDocument;

    /// List documents, newest upload first.
    async fn list(
        pool: &PgPool,
        filter: &DocumentFilter,
    ) -> Result<Vec<DocumentListing>, sqlx::Error> {
        let filters = EqFilters::new()
            .id("d.course_id", filter.course_id)
            .text("d.file_type", filter.file_type.as_deref())
            .text("d.category", filter.category.as_deref())
            .text("d.difficulty", filter.difficulty.as_deref())
            .id("d.instructor_id", filter.instructor);

        let query = format!(
            "{} {} ORDER BY d.upload_date DESC, d.id DESC",
            Self::listing_select(),
            filters.where_clause()
        );
        filters
            .bind(sqlx::query_as::<_, DocumentListing>(&query))
            .fetch_all(pool)
            .await
    }

    async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<DocumentListing>, sqlx::Error> {
        let query = format!("{} WHERE d.id = $1", Self::listing_select());
        sqlx::query_as::<_, DocumentListing>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateDocument,
    ) -> Result<Document, sqlx::Error> {
        let query = format!(
            "INSERT INTO documents \
                (title, description, course_id, instructor_id, file_type, size, file_url, \
                 category, difficulty, downloads, upload_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 0, NOW()) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.course_id)
            .bind(owner_id)
            .bind(&input.file_type)
            .bind(&input.size)
            .bind(&input.file_url)
            .bind(&input.category)
            .bind(&input.difficulty)
            .fetch_one(pool)
            .await
    }

    async fn update(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
        input: &UpdateDocument,
    ) -> Result<Option<Document>, sqlx::Error> {
        let query = format!(
            "UPDATE documents SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                file_type = COALESCE($5, file_type),
                size = COALESCE($6, size),
                file_url = COALESCE($7, file_url),
                category = COALESCE($8, category),
                difficulty = COALESCE($9, difficulty),
                updated_at = NOW()
             WHERE id = $1 AND instructor_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.file_type)
            .bind(&input.size)
            .bind(&input.file_url)
            .bind(&input.category)
            .bind(&input.difficulty)
            .fetch_optional(pool)
            .await
    }

    fn parent_course_id(input: &CreateDocument) -> Option<DbId> {
        Some(input.course_id)
    }
}
