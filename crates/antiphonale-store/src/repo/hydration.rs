//! Hydration: load a database into the in-memory kernel
//!
//! Rows keep their keys, so the hydrated Store allocates new keys after the
//! highest persisted one. Tables load in dependency order and the result is
//! checked with the kernel's structural invariants.

use antiphonale_core::model::{
    Anno, Antiphona, AntiphonaMissa, AntiphonaType, Documentum, Missa, MissaType,
    MissaTypeAntiphonaType, Suggestion,
};
use antiphonale_core::ops::{Store, Stored};
use antiphonale_core::rules::invariants::validate_store;
use rusqlite::Connection;
use tracing::debug;

use super::rows::Persisted;
use super::SqliteRepo;
use crate::errors::Result;

/// Load every table into a fresh Store
///
/// # Errors
/// * `Persistence` - a query failed or a stored value could not be decoded
/// * any kernel invariant error if the database violates one
pub fn load_store(conn: &Connection) -> Result<Store> {
    let mut store = Store::new();
    load::<Anno>(conn, &mut store)?;
    load::<AntiphonaType>(conn, &mut store)?;
    load::<Documentum>(conn, &mut store)?;
    load::<MissaType>(conn, &mut store)?;
    load::<MissaTypeAntiphonaType>(conn, &mut store)?;
    load::<Missa>(conn, &mut store)?;
    load::<Antiphona>(conn, &mut store)?;
    load::<AntiphonaMissa>(conn, &mut store)?;
    load::<Suggestion>(conn, &mut store)?;

    validate_store(&store)?;
    Ok(store)
}

fn load<T: Persisted + Stored>(conn: &Connection, store: &mut Store) -> Result<()> {
    let rows = SqliteRepo::list::<T>(conn)?;
    debug!(entity = T::NAME, rows = rows.len(), "hydrated");
    for row in rows {
        store.insert(row);
    }
    Ok(())
}
