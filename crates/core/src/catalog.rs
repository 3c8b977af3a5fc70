//! Catalog vocabularies for courses, content, and schedules.
//!
//! The database enforces these with CHECK constraints; request payloads are
//! passed through unvalidated and rejected by the store. The constants here
//! name the values for code that needs to produce them (initial statuses,
//! dashboard queries) and document the accepted sets.

// ---------------------------------------------------------------------------
// Difficulty tiers
// ---------------------------------------------------------------------------

pub const DIFFICULTY_BEGINNER: &str = "Beginner";
pub const DIFFICULTY_INTERMEDIATE: &str = "Intermediate";
pub const DIFFICULTY_ADVANCED: &str = "Advanced";

/// Difficulty tiers shared by courses, lectures, and documents.
pub const VALID_DIFFICULTIES: &[&str] = &[
    DIFFICULTY_BEGINNER,
    DIFFICULTY_INTERMEDIATE,
    DIFFICULTY_ADVANCED,
];

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

pub const EVENT_TYPES: &[&str] = &["lecture", "workshop", "exam", "seminar"];

pub const EVENT_STATUS_UPCOMING: &str = "upcoming";
pub const EVENT_STATUS_COMPLETED: &str = "completed";
pub const EVENT_STATUS_CANCELLED: &str = "cancelled";

pub const EVENT_STATUSES: &[&str] = &[
    EVENT_STATUS_UPCOMING,
    EVENT_STATUS_COMPLETED,
    EVENT_STATUS_CANCELLED,
];

// ---------------------------------------------------------------------------
// Live sessions
// ---------------------------------------------------------------------------

pub const SESSION_STATUS_UPCOMING: &str = "upcoming";
pub const SESSION_STATUS_LIVE: &str = "live";
pub const SESSION_STATUS_COMPLETED: &str = "completed";

pub const SESSION_STATUSES: &[&str] = &[
    SESSION_STATUS_UPCOMING,
    SESSION_STATUS_LIVE,
    SESSION_STATUS_COMPLETED,
];

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

pub const DOCUMENT_TYPES: &[&str] = &["pdf", "docx", "pptx"];

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Number of upcoming events shown on the dashboard.
pub const DASHBOARD_UPCOMING_LIMIT: i64 = 3;
