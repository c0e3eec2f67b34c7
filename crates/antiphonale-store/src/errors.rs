//! Error helpers for the store
//!
//! Everything the store returns is an `ExError`. Domain errors from the
//! kernel rules convert through `From<CatalogError>`; rusqlite errors go
//! through `from_rusqlite`, which recognises constraint failures.

use antiphonale_core::errors::{ExError, ExErrorKind};
use rusqlite::ffi;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

pub fn seed_validation(reason: &str) -> ExError {
    ExError::new(ExErrorKind::Validation)
        .with_op("seed_parse")
        .with_message(reason.to_string())
}

/// Map a rusqlite error, classifying constraint failures
///
/// Foreign-key failures become `ReferentialIntegrity`, unique / not-null /
/// check failures become `Validation`, everything else `Persistence`.
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    let kind = match &err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation => {
            match e.extended_code {
                ffi::SQLITE_CONSTRAINT_FOREIGNKEY => ExErrorKind::ReferentialIntegrity,
                _ => ExErrorKind::Validation,
            }
        }
        rusqlite::Error::QueryReturnedNoRows => ExErrorKind::NotFound,
        _ => ExErrorKind::Persistence,
    };
    ExError::new(kind)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// True when `err` is a UNIQUE / PRIMARY KEY violation
pub fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
                || e.extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY
    )
}

pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

pub fn serialization_error(operation: &str, message: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(operation.to_string())
        .with_message(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_foreign_key_failure_is_referential_integrity() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             CREATE TABLE parent (id INTEGER PRIMARY KEY);
             CREATE TABLE child (id INTEGER PRIMARY KEY, parent_id INTEGER NOT NULL REFERENCES parent(id));",
        )
        .unwrap();

        let err = conn
            .execute("INSERT INTO child (parent_id) VALUES (42)", [])
            .unwrap_err();
        assert_eq!(
            from_rusqlite(err).kind(),
            ExErrorKind::ReferentialIntegrity
        );
    }

    #[test]
    fn test_unique_failure_detected() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (name TEXT UNIQUE); INSERT INTO t VALUES ('a');")
            .unwrap();
        let err = conn.execute("INSERT INTO t VALUES ('a')", []).unwrap_err();
        assert!(is_unique_violation(&err));
        assert_eq!(from_rusqlite(err).kind(), ExErrorKind::Validation);
    }
}
