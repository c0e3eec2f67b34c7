//! Schema migrations
//!
//! SQL files are embedded at compile time, applied in order inside one
//! transaction each, and recorded in `schema_version` with their SHA-256
//! checksum. Re-running is a no-op; an applied migration whose SQL has since
//! changed is reported as a checksum mismatch.

mod checksums;
mod embedded;
mod runner;

pub use checksums::compute_checksum;
pub use embedded::{get_migrations, Migration};
pub use runner::{applied_migrations, apply_migrations};
