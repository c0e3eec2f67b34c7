//! Seed digest canonicalization
//!
//! Reference-data sections are sets, so they are sorted before hashing.
//! Membership lists keep their order because order is data.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::errors::{serialization_error, Result};
use crate::seed::format_v0::SeedV0;

#[derive(Debug, Serialize)]
struct CanonicalSeed<'a> {
    schema_version: u32,
    annos: Vec<&'a str>,
    antiphona_types: Vec<&'a str>,
    documenta: Vec<&'a str>,
    missa_types: Vec<CanonicalMissaType<'a>>,
}

#[derive(Debug, Serialize, PartialEq, Eq, PartialOrd, Ord)]
struct CanonicalMissaType<'a> {
    name: &'a str,
    antiphona_types: Vec<&'a str>,
}

/// SHA-256 hex digest of the canonical seed
pub fn compute_seed_digest(seed: &SeedV0) -> Result<String> {
    let json = serde_json::to_string(&canonicalize(seed))
        .map_err(|e| serialization_error("seed_digest", e.to_string()))?;
    Ok(hex::encode(Sha256::digest(json.as_bytes())))
}

fn canonicalize(seed: &SeedV0) -> CanonicalSeed<'_> {
    let mut missa_types: Vec<CanonicalMissaType<'_>> = seed
        .missa_types
        .iter()
        .map(|mt| CanonicalMissaType {
            name: &mt.name,
            antiphona_types: mt.antiphona_types.iter().map(String::as_str).collect(),
        })
        .collect();
    missa_types.sort();

    CanonicalSeed {
        schema_version: seed.schema_version,
        annos: sorted(&seed.annos),
        antiphona_types: sorted(&seed.antiphona_types),
        documenta: sorted(&seed.documenta),
        missa_types,
    }
}

fn sorted(names: &[String]) -> Vec<&str> {
    let mut v: Vec<&str> = names.iter().map(String::as_str).collect();
    v.sort_unstable();
    v
}
