pub mod auth;
pub mod dashboard;
pub mod enrollment;
pub mod profile;
pub mod resource;
