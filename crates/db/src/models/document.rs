//! Document entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vedic_core::types::{DbId, Timestamp};

use crate::models::{empty_as_none, InstructorSummary};

/// A document row from the `documents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Document {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub course_id: DbId,
    pub instructor_id: DbId,
    /// File kind (`pdf`, `docx`, `pptx`).
    #[serde(rename = "type")]
    pub file_type: Option<String>,
    pub size: Option<String>,
    pub file_url: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub downloads: i32,
    pub upload_date: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A document joined with its course title and instructor.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DocumentListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub document: Document,
    pub course_title: Option<String>,
    #[sqlx(flatten)]
    pub instructor: InstructorSummary,
}

/// Equality filters for listing documents.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub course_id: Option<DbId>,
    #[serde(rename = "type")]
    pub file_type: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub instructor: Option<DbId>,
}

/// DTO for registering a new document under a course the caller owns.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDocument {
    pub title: String,
    pub description: Option<String>,
    #[serde(alias = "courseId")]
    pub course_id: DbId,
    #[serde(rename = "type")]
    pub file_type: Option<String>,
    pub size: Option<String>,
    #[serde(alias = "fileUrl")]
    pub file_url: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
}

/// DTO for updating an existing document. The parent course cannot change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDocument {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub file_type: Option<String>,
    pub size: Option<String>,
    #[serde(alias = "fileUrl")]
    pub file_url: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
}
