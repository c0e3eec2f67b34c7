//! Antiphonale Core - in-memory catalog kernel
//!
//! This crate holds the relational model of the antiphona catalog and the
//! rules that keep it consistent:
//! - Entity models (Anno, AntiphonaType, MissaType, Missa, Antiphona,
//!   Documentum, the two junction entities, Suggestion)
//! - Field validation (max lengths, URLs, fixed-point similarity, orders)
//! - CRUD operations with cascade / protect / set-default deletion semantics
//! - Relationship queries and display-text rendering
//! - The `apply()` command boundary and the admin schema registry

pub mod admin;
pub mod apply;
pub mod commands;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod policy;
pub mod queries;
pub mod render;
pub mod rules;

// Re-export commonly used types
pub use apply::apply;
pub use commands::Command;
pub use errors::{CatalogError, ExError, ExErrorKind, Result};
pub use model::{
    Anno, Antiphona, AntiphonaMissa, AntiphonaType, Documentum, EntityKind, Missa, MissaType,
    MissaTypeAntiphonaType, Suggestion,
};
pub use ops::Store;
pub use policy::{DefaultMissaTypeResolver, DominicaResolver};
