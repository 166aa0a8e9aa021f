// web_app/api/mod.rs - API module for server-side logic
//
// Database access, configuration and session resolution for the
// server functions. Compiled only with the `ssr` feature.

pub mod config;
pub mod db;
pub mod error;
pub mod queries;
pub mod seed;
pub mod session;

pub use error::StoreError;

/// Schema DDL, applied at startup and by the test fixtures
pub const SCHEMA_SQL: &str = include_str!("../../../sql/schema.sql");
