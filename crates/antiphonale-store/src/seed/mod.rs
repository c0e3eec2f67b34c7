//! Seed import of reference data
//!
//! - Seed format v0 (YAML)
//! - Parser with validation
//! - Digest canonicalization
//! - Importer recording each import in `seed_imports`

pub mod digest;
pub mod format_v0;
pub mod importer;
pub mod parser;

pub use digest::compute_seed_digest;
pub use format_v0::SeedV0;
pub use importer::{import_seed, import_seed_str};
pub use parser::{parse_seed_file, parse_seed_str};
