//! Seed parser with validation
//!
//! Checks the schema version, every name against the field rules of its
//! entity, duplicate names, and that membership lists only name
//! AntiphonaTypes the seed (or the target database) knows about.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use antiphonale_core::rules::validation;
use rusqlite::{Connection, OptionalExtension};

use crate::errors::{from_rusqlite, seed_validation, Result};
use crate::seed::format_v0::SeedV0;

/// Parse a seed file from a path
pub fn parse_seed_file(path: &Path) -> Result<SeedV0> {
    parse_seed_file_with_db(path, None)
}

/// Parse a seed file, resolving membership names against `conn` as well
pub fn parse_seed_file_with_db(path: &Path, conn: Option<&Connection>) -> Result<SeedV0> {
    let content = fs::read_to_string(path)
        .map_err(|e| seed_validation(&format!("Failed to read seed file: {}", e)))?;
    parse_seed_str_with_db(&content, conn)
}

/// Parse a seed from a string
pub fn parse_seed_str(content: &str) -> Result<SeedV0> {
    parse_seed_str_with_db(content, None)
}

pub fn parse_seed_str_with_db(content: &str, conn: Option<&Connection>) -> Result<SeedV0> {
    let seed: SeedV0 = serde_yaml::from_str(content)
        .map_err(|e| seed_validation(&format!("YAML parse error: {}", e)))?;
    validate_seed(&seed, conn)?;
    Ok(seed)
}

fn validate_seed(seed: &SeedV0, conn: Option<&Connection>) -> Result<()> {
    if seed.schema_version != 0 {
        return Err(seed_validation(&format!(
            "Unsupported schema_version: {}. Expected 0",
            seed.schema_version
        )));
    }

    for name in &seed.annos {
        validation::validate_anno_name(name)?;
    }
    for name in &seed.antiphona_types {
        validation::validate_antiphona_type_name(name)?;
    }
    for name in &seed.documenta {
        validation::validate_documentum_name(name)?;
    }
    for mt in &seed.missa_types {
        validation::validate_missa_type_name(&mt.name)?;
    }

    unique_names("annos", seed.annos.iter())?;
    unique_names("antiphona_types", seed.antiphona_types.iter())?;
    unique_names("documenta", seed.documenta.iter())?;
    unique_names("missa_types", seed.missa_types.iter().map(|mt| &mt.name))?;

    let declared: HashSet<&str> = seed.antiphona_types.iter().map(String::as_str).collect();
    for mt in &seed.missa_types {
        if mt.antiphona_types.len() > usize::from(validation::ORDER_MAX) {
            return Err(seed_validation(&format!(
                "MissaType {} lists more than {} antiphona types",
                mt.name,
                validation::ORDER_MAX
            )));
        }
        unique_names(&mt.name, mt.antiphona_types.iter())?;
        for member in &mt.antiphona_types {
            if declared.contains(member.as_str()) {
                continue;
            }
            let in_db = match conn {
                Some(conn) => antiphona_type_exists(conn, member)?,
                None => false,
            };
            if !in_db {
                return Err(seed_validation(&format!(
                    "MissaType {} references unknown antiphona type: {}",
                    mt.name, member
                )));
            }
        }
    }

    Ok(())
}

fn unique_names<'a>(section: &str, names: impl Iterator<Item = &'a String>) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(seed_validation(&format!(
                "Duplicate name {:?} in {}",
                name, section
            )));
        }
    }
    Ok(())
}

fn antiphona_type_exists(conn: &Connection, name: &str) -> Result<bool> {
    let found = conn
        .query_row(
            "SELECT 1 FROM antiphona_types WHERE name = ?1 LIMIT 1",
            [name],
            |_| Ok(()),
        )
        .optional()
        .map_err(from_rusqlite)?;
    Ok(found.is_some())
}
