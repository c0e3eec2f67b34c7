//! Types shared across the Antiphonale crates
//!
//! Currently this is the vocabulary of the structured logging facility:
//! canonical field keys and event names used by the core macros and by
//! anything that asserts on captured events.

pub mod schema;
