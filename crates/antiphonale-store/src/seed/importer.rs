//! Seed importer
//!
//! Applies a parsed seed in one immediate transaction. Rows are matched by
//! name, so importing the same seed again changes nothing except adding a
//! row to `seed_imports`. The default MissaType is always ensured.

use std::path::Path;
use std::time::Instant;

use antiphonale_core::model::DEFAULT_MISSA_TYPE_NAME;
use antiphonale_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};
use tracing::debug;

use crate::errors::{from_rusqlite, Result};
use crate::repo::sqlite_repo::ensure_default;
use crate::repo::SqliteRepo;
use crate::seed::format_v0::SeedV0;
use crate::seed::{compute_seed_digest, parser};

/// Import a seed file, returning its digest
///
/// # Errors
/// * `Validation` - the seed fails parsing or validation
/// * `Persistence` - a write failed; nothing is committed
pub fn import_seed(path: &Path, conn: &mut Connection) -> Result<String> {
    let source = path.display().to_string();
    logged(&source, || {
        let seed = parser::parse_seed_file_with_db(path, Some(&*conn))?;
        apply_seed(&seed, &source, conn)
    })
}

/// Import a seed held in memory; `source` is recorded with the import
pub fn import_seed_str(content: &str, source: &str, conn: &mut Connection) -> Result<String> {
    logged(source, || {
        let seed = parser::parse_seed_str_with_db(content, Some(&*conn))?;
        apply_seed(&seed, source, conn)
    })
}

fn logged(source: &str, run: impl FnOnce() -> Result<String>) -> Result<String> {
    let start = Instant::now();
    log_op_start!("seed_import", source = source);
    let result = run();
    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => {
            log_op_end!("seed_import", duration_ms = duration_ms);
        }
        Err(e) => {
            log_op_error!("seed_import", e.clone(), duration_ms = duration_ms);
        }
    }
    result
}

fn apply_seed(seed: &SeedV0, source: &str, conn: &mut Connection) -> Result<String> {
    let digest = compute_seed_digest(seed)?;
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(from_rusqlite)?;

    let mut created = 0usize;
    for name in &seed.annos {
        if id_by_name(&tx, "annos", name)?.is_none() {
            SqliteRepo::create_anno(&tx, name)?;
            created += 1;
        }
    }
    for name in &seed.antiphona_types {
        if id_by_name(&tx, "antiphona_types", name)?.is_none() {
            SqliteRepo::create_antiphona_type(&tx, name)?;
            created += 1;
        }
    }
    for name in &seed.documenta {
        if id_by_name(&tx, "documenta", name)?.is_none() {
            SqliteRepo::create_documentum(&tx, name)?;
            created += 1;
        }
    }

    let default_id = ensure_default(&tx)?;
    for mt in &seed.missa_types {
        let missa_type_id = if mt.name == DEFAULT_MISSA_TYPE_NAME {
            default_id
        } else {
            match id_by_name(&tx, "missa_types", &mt.name)? {
                Some(id) => id,
                None => {
                    created += 1;
                    SqliteRepo::create_missa_type(&tx, &mt.name)?
                }
            }
        };

        for (position, member) in mt.antiphona_types.iter().enumerate() {
            let antiphona_type_id = match id_by_name(&tx, "antiphona_types", member)? {
                Some(id) => id,
                None => SqliteRepo::create_antiphona_type(&tx, member)?,
            };
            if is_member(&tx, missa_type_id, antiphona_type_id)? {
                continue;
            }
            // position is bounded by ORDER_MAX in the parser
            let order = u16::try_from(position + 1).unwrap_or(u16::MAX);
            SqliteRepo::add_member(&tx, missa_type_id, antiphona_type_id, order)?;
            created += 1;
        }
    }

    tx.execute(
        "INSERT INTO seed_imports (digest, source, imported_at) VALUES (?1, ?2, ?3)",
        params![digest, source, chrono::Utc::now().timestamp()],
    )
    .map_err(from_rusqlite)?;
    tx.commit().map_err(from_rusqlite)?;

    debug!(source, created, digest = %digest, "seed rows applied");
    Ok(digest)
}

/// First row of `table` with this name
fn id_by_name(conn: &Connection, table: &str, name: &str) -> Result<Option<i64>> {
    let sql = format!("SELECT id FROM {} WHERE name = ?1 ORDER BY id LIMIT 1", table);
    conn.query_row(&sql, [name], |row| row.get(0))
        .optional()
        .map_err(from_rusqlite)
}

fn is_member(conn: &Connection, missa_type_id: i64, antiphona_type_id: i64) -> Result<bool> {
    let found = conn
        .query_row(
            "SELECT 1 FROM missa_type_antiphona_types
             WHERE missa_type_id = ?1 AND antiphona_type_id = ?2 LIMIT 1",
            [missa_type_id, antiphona_type_id],
            |_| Ok(()),
        )
        .optional()
        .map_err(from_rusqlite)?;
    Ok(found.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_catalog_in_memory;
    use antiphonale_core::model::{AntiphonaType, MissaType};

    const SEED: &str = r#"
schema_version: 0
annos: [A, B, C]
antiphona_types: [Introito, Offertorium, Communio]
documenta: [Graduale Romanum]
missa_types:
  - name: Dominica
    antiphona_types: [Introito, Offertorium, Communio]
"#;

    #[test]
    fn test_seed_fills_default_membership() {
        let mut conn = open_catalog_in_memory().unwrap();
        import_seed_str(SEED, "inline", &mut conn).unwrap();

        let dominica = SqliteRepo::find_default_missa_type(&conn).unwrap();
        let names: Vec<String> = SqliteRepo::ordered_antiphona_types(&conn, dominica)
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["Introito", "Offertorium", "Communio"]);
        assert_eq!(SqliteRepo::count::<MissaType>(&conn).unwrap(), 1);
    }

    #[test]
    fn test_reimport_changes_nothing() {
        let mut conn = open_catalog_in_memory().unwrap();
        let first = import_seed_str(SEED, "inline", &mut conn).unwrap();
        let second = import_seed_str(SEED, "inline", &mut conn).unwrap();

        assert_eq!(first, second);
        assert_eq!(SqliteRepo::count::<AntiphonaType>(&conn).unwrap(), 3);
        let imports: i64 = conn
            .query_row("SELECT COUNT(*) FROM seed_imports", [], |row| row.get(0))
            .unwrap();
        assert_eq!(imports, 2);
    }
}
