//! Antiphonale Store - SQLite persistence and seed import
//!
//! Provides:
//! - Connection setup (foreign keys, WAL, busy timeout)
//! - Embedded, checksummed schema migrations
//! - `SqliteRepo`: every catalog operation run directly against the database
//! - Hydration of a database into the in-memory `Store`
//! - YAML seed import of reference data

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod seed;

pub use errors::Result;
pub use repo::SqliteRepo;
