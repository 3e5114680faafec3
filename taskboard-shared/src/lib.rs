//! # Taskboard Shared Library
//!
//! This crate contains the data layer shared by the Taskboard API server:
//!
//! - `db`: PostgreSQL connection pool and migration runner
//! - `models`: entity types exchanged between layers
//! - `store`: per-entity persistence operations

pub mod db;
pub mod models;
pub mod store;

/// Current version of the Taskboard shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
