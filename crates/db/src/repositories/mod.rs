//! Repository layer: one zero-sized struct per table with async query methods.

pub mod course_repo;
pub mod dashboard_repo;
pub mod document_repo;
pub mod enrollment_repo;
pub mod event_repo;
pub mod filter;
pub mod lecture_repo;
pub mod live_session_repo;
pub mod profile_repo;
pub mod resource;
pub mod session_repo;
pub mod user_repo;

pub use course_repo::CourseRepo;
pub use dashboard_repo::DashboardRepo;
pub use document_repo::DocumentRepo;
pub use enrollment_repo::EnrollmentRepo;
pub use event_repo::EventRepo;
pub use lecture_repo::LectureRepo;
pub use live_session_repo::LiveSessionRepo;
pub use profile_repo::ProfileRepo;
pub use resource::{ResourceRepo, ResourceSchema};
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
