//! Domain vocabulary shared by the VedicConnect database and API crates.
//!
//! This crate performs no I/O. It holds the error type, id/timestamp
//! aliases, role and catalog constants, and the ownership rule.

pub mod catalog;
pub mod error;
pub mod ownership;
pub mod roles;
pub mod types;
