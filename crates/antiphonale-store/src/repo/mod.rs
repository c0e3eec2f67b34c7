//! Repository layer persisting the catalog to SQLite

pub mod hydration;
pub mod rows;
pub mod sqlite_repo;

pub use hydration::load_store;
pub use rows::Persisted;
pub use sqlite_repo::{MissaTypeDeletion, SqliteRepo};
