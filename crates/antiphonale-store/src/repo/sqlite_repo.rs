//! SQLite repository
//!
//! Runs the catalog operations directly against the database with the same
//! semantics as the in-memory kernel. Field rules come from
//! `antiphonale_core::rules::validation`; deletion behaviour is split between
//! the schema's foreign keys (cascade, restrict) and explicit checks here
//! that turn a restricted delete into a `Protected` error with a count.
//!
//! Single-statement operations take `&Connection`. Operations made of several
//! statements take `&mut Connection` and run in their own transaction.

use antiphonale_core::errors::CatalogError;
use antiphonale_core::model::{
    Anno, Antiphona, AntiphonaMissa, AntiphonaMissaDraft, AntiphonaType, Documentum, Entity,
    EntityKind, Missa, MissaType, MissaTypeAntiphonaType, Suggestion, SuggestionDraft,
    DEFAULT_MISSA_TYPE_NAME,
};
use antiphonale_core::rules::validation;
use rusqlite::{params, Connection, OptionalExtension, Params, Transaction, TransactionBehavior};
use tracing::debug;

use super::rows::Persisted;
use crate::errors::{from_rusqlite, is_unique_violation, Result};

/// What a MissaType deletion touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MissaTypeDeletion {
    /// Memberships removed with the row
    pub cascaded: usize,
    /// Missae re-pointed at the default MissaType
    pub rewritten: usize,
    /// The default MissaType the Missae now reference, if any were rewritten
    pub fallback: Option<i64>,
}

/// SQLite repository for the catalog
pub struct SqliteRepo;

impl SqliteRepo {
    // ===== Generic reads =====

    /// Read one row by key
    ///
    /// # Errors
    /// * `NotFound` - no such row
    pub fn get<T: Persisted>(conn: &Connection, id: i64) -> Result<T> {
        let sql = format!("{} WHERE id = ?1", T::SELECT);
        conn.query_row(&sql, [id], T::from_row)
            .optional()
            .map_err(from_rusqlite)?
            .ok_or_else(|| {
                CatalogError::NotFound {
                    entity: T::NAME,
                    id,
                }
                .into()
            })
    }

    /// All rows of a kind, by key
    pub fn list<T: Persisted>(conn: &Connection) -> Result<Vec<T>> {
        let sql = format!("{} ORDER BY id", T::SELECT);
        query_all(conn, &sql, [], T::from_row)
    }

    pub fn count<T: Persisted>(conn: &Connection) -> Result<usize> {
        let sql = format!("SELECT COUNT(*) FROM {}", T::KIND.table());
        count_where(conn, &sql, [])
    }

    /// # Errors
    /// * `NotFound` - no such row
    pub fn require<T: Persisted>(conn: &Connection, id: i64) -> Result<()> {
        let sql = format!("SELECT 1 FROM {} WHERE id = ?1", T::KIND.table());
        let found = conn
            .query_row(&sql, [id], |_| Ok(()))
            .optional()
            .map_err(from_rusqlite)?;
        match found {
            Some(()) => Ok(()),
            None => Err(CatalogError::NotFound {
                entity: T::NAME,
                id,
            }
            .into()),
        }
    }

    // ===== Reference data: Anno, AntiphonaType, Documentum =====

    pub fn create_anno(conn: &Connection, name: &str) -> Result<i64> {
        validation::validate_anno_name(name)?;
        insert(conn, "INSERT INTO annos (name) VALUES (?1)", [name])
    }

    pub fn update_anno(conn: &Connection, id: i64, name: &str) -> Result<()> {
        validation::validate_anno_name(name)?;
        update::<Anno, _>(conn, "UPDATE annos SET name = ?1 WHERE id = ?2", params![name, id], id)
    }

    /// Delete an Anno no assignment references
    ///
    /// # Errors
    /// * `NotFound` - no such Anno
    /// * `Protected` - referenced by at least one AntiphonaMissa
    pub fn delete_anno(conn: &mut Connection, id: i64) -> Result<()> {
        let tx = conn.transaction().map_err(from_rusqlite)?;
        Self::require::<Anno>(&tx, id)?;
        protect::<Anno>(&tx, "anno_id", id)?;
        tx.execute("DELETE FROM annos WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;
        tx.commit().map_err(from_rusqlite)
    }

    pub fn create_antiphona_type(conn: &Connection, name: &str) -> Result<i64> {
        validation::validate_antiphona_type_name(name)?;
        insert(conn, "INSERT INTO antiphona_types (name) VALUES (?1)", [name])
    }

    pub fn update_antiphona_type(conn: &Connection, id: i64, name: &str) -> Result<()> {
        validation::validate_antiphona_type_name(name)?;
        update::<AntiphonaType, _>(
            conn,
            "UPDATE antiphona_types SET name = ?1 WHERE id = ?2",
            params![name, id],
            id,
        )
    }

    /// Delete an AntiphonaType no assignment references, with its memberships
    ///
    /// # Errors
    /// * `NotFound` - no such AntiphonaType
    /// * `Protected` - referenced by at least one AntiphonaMissa
    pub fn delete_antiphona_type(conn: &mut Connection, id: i64) -> Result<()> {
        let tx = conn.transaction().map_err(from_rusqlite)?;
        Self::require::<AntiphonaType>(&tx, id)?;
        protect::<AntiphonaType>(&tx, "antiphona_type_id", id)?;
        tx.execute("DELETE FROM antiphona_types WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;
        tx.commit().map_err(from_rusqlite)
    }

    pub fn create_documentum(conn: &Connection, name: &str) -> Result<i64> {
        validation::validate_documentum_name(name)?;
        insert(conn, "INSERT INTO documenta (name) VALUES (?1)", [name])
    }

    pub fn update_documentum(conn: &Connection, id: i64, name: &str) -> Result<()> {
        validation::validate_documentum_name(name)?;
        update::<Documentum, _>(
            conn,
            "UPDATE documenta SET name = ?1 WHERE id = ?2",
            params![name, id],
            id,
        )
    }

    /// Delete a Documentum no assignment references
    ///
    /// # Errors
    /// * `NotFound` - no such Documentum
    /// * `Protected` - referenced by at least one AntiphonaMissa
    pub fn delete_documentum(conn: &mut Connection, id: i64) -> Result<()> {
        let tx = conn.transaction().map_err(from_rusqlite)?;
        Self::require::<Documentum>(&tx, id)?;
        protect::<Documentum>(&tx, "documentum_id", id)?;
        tx.execute("DELETE FROM documenta WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;
        tx.commit().map_err(from_rusqlite)
    }

    // ===== MissaType =====

    /// # Errors
    /// * `FieldRequired` / `FieldTooLong` - invalid name
    /// * `ReservedMissaTypeName` - the default name, which only
    ///   `resolve_default_missa_type` assigns
    pub fn create_missa_type(conn: &Connection, name: &str) -> Result<i64> {
        validation::validate_missa_type_name(name)?;
        if name == DEFAULT_MISSA_TYPE_NAME {
            return Err(reserved_name(name));
        }
        conn.execute("INSERT INTO missa_types (name) VALUES (?1)", [name])
            .map_err(|e| default_conflict(e, name))?;
        Ok(conn.last_insert_rowid())
    }

    /// The default row may keep its name; no other row may take it
    pub fn update_missa_type(conn: &Connection, id: i64, name: &str) -> Result<()> {
        validation::validate_missa_type_name(name)?;
        if name == DEFAULT_MISSA_TYPE_NAME && find_default(conn)? != Some(id) {
            return Err(reserved_name(name));
        }
        let changed = conn
            .execute(
                "UPDATE missa_types SET name = ?1 WHERE id = ?2",
                params![name, id],
            )
            .map_err(|e| default_conflict(e, name))?;
        if changed == 0 {
            return Err(CatalogError::NotFound {
                entity: MissaType::NAME,
                id,
            }
            .into());
        }
        Ok(())
    }

    /// Look up or create the default MissaType
    ///
    /// Runs in an immediate transaction; the partial unique index on the
    /// default name makes concurrent first calls converge on one row.
    pub fn resolve_default_missa_type(conn: &mut Connection) -> Result<i64> {
        let tx = immediate(conn)?;
        let id = ensure_default(&tx)?;
        tx.commit().map_err(from_rusqlite)?;
        Ok(id)
    }

    /// Strict lookup of the default MissaType
    ///
    /// # Errors
    /// * `DefaultMissaTypeMissing` - not yet created
    pub fn find_default_missa_type(conn: &Connection) -> Result<i64> {
        find_default(conn)?.ok_or_else(|| {
            CatalogError::DefaultMissaTypeMissing {
                name: DEFAULT_MISSA_TYPE_NAME.to_string(),
            }
            .into()
        })
    }

    /// Delete a MissaType, re-pointing its Missae at the default
    ///
    /// Memberships go with the row through `ON DELETE CASCADE`. Missae are
    /// rewritten inside the same transaction; their foreign key is deferred
    /// so it is only checked at commit. Deleting the default row itself
    /// leaves a freshly created default behind when Missae needed it.
    ///
    /// # Errors
    /// * `NotFound` - no such MissaType
    pub fn delete_missa_type(conn: &mut Connection, id: i64) -> Result<MissaTypeDeletion> {
        let tx = immediate(conn)?;
        Self::require::<MissaType>(&tx, id)?;

        let cascaded = count_where(
            &tx,
            "SELECT COUNT(*) FROM missa_type_antiphona_types WHERE missa_type_id = ?1",
            [id],
        )?;
        let orphans = count_where(
            &tx,
            "SELECT COUNT(*) FROM missae WHERE missa_type_id = ?1",
            [id],
        )?;

        tx.execute("DELETE FROM missa_types WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;

        let mut outcome = MissaTypeDeletion {
            cascaded,
            ..Default::default()
        };
        if orphans > 0 {
            let fallback = ensure_default(&tx)?;
            outcome.rewritten = tx
                .execute(
                    "UPDATE missae SET missa_type_id = ?1 WHERE missa_type_id = ?2",
                    params![fallback, id],
                )
                .map_err(from_rusqlite)?;
            outcome.fallback = Some(fallback);
        }

        tx.commit().map_err(from_rusqlite)?;
        debug!(
            missa_type_id = id,
            cascaded = outcome.cascaded,
            rewritten = outcome.rewritten,
            "missa type deleted"
        );
        Ok(outcome)
    }

    // ===== Memberships =====

    /// # Errors
    /// * `InvalidOrder` - order outside 1..=32767
    /// * `NotFound` - either side missing
    /// * `DuplicateOrder` - order already used in this MissaType
    pub fn add_member(
        conn: &Connection,
        missa_type_id: i64,
        antiphona_type_id: i64,
        order: u16,
    ) -> Result<i64> {
        validation::check_order(order)?;
        Self::require::<MissaType>(conn, missa_type_id)?;
        Self::require::<AntiphonaType>(conn, antiphona_type_id)?;
        conn.execute(
            "INSERT INTO missa_type_antiphona_types (missa_type_id, antiphona_type_id, \"order\")
             VALUES (?1, ?2, ?3)",
            params![missa_type_id, antiphona_type_id, order],
        )
        .map_err(|e| order_conflict(e, missa_type_id, order))?;
        Ok(conn.last_insert_rowid())
    }

    pub fn update_member_order(conn: &Connection, membership_id: i64, order: u16) -> Result<()> {
        validation::check_order(order)?;
        let member = Self::get::<MissaTypeAntiphonaType>(conn, membership_id)?;
        conn.execute(
            "UPDATE missa_type_antiphona_types SET \"order\" = ?1 WHERE id = ?2",
            params![order, membership_id],
        )
        .map_err(|e| order_conflict(e, member.missa_type_id, order))?;
        Ok(())
    }

    pub fn remove_member(conn: &Connection, membership_id: i64) -> Result<()> {
        delete_by_id::<MissaTypeAntiphonaType>(conn, membership_id)
    }

    /// Memberships of a MissaType by ascending order
    pub fn members_of(conn: &Connection, missa_type_id: i64) -> Result<Vec<MissaTypeAntiphonaType>> {
        Self::require::<MissaType>(conn, missa_type_id)?;
        let sql = format!(
            "{} WHERE missa_type_id = ?1 ORDER BY \"order\"",
            MissaTypeAntiphonaType::SELECT
        );
        query_all(conn, &sql, [missa_type_id], MissaTypeAntiphonaType::from_row)
    }

    /// AntiphonaTypes of a MissaType by ascending membership order
    pub fn ordered_antiphona_types(
        conn: &Connection,
        missa_type_id: i64,
    ) -> Result<Vec<AntiphonaType>> {
        Self::require::<MissaType>(conn, missa_type_id)?;
        query_all(
            conn,
            "SELECT t.id, t.name
             FROM missa_type_antiphona_types m
             JOIN antiphona_types t ON t.id = m.antiphona_type_id
             WHERE m.missa_type_id = ?1
             ORDER BY m.\"order\"",
            [missa_type_id],
            AntiphonaType::from_row,
        )
    }

    // ===== Missa =====

    /// Create a Missa; `None` files it under the default MissaType
    ///
    /// # Errors
    /// * `FieldRequired` / `FieldTooLong` - invalid name
    /// * `NotFound` - explicit MissaType does not exist
    pub fn create_missa(
        conn: &mut Connection,
        name: &str,
        missa_type_id: Option<i64>,
    ) -> Result<i64> {
        validation::validate_missa_name(name)?;
        let tx = immediate(conn)?;
        let missa_type_id = match missa_type_id {
            Some(id) => {
                Self::require::<MissaType>(&tx, id)?;
                id
            }
            None => ensure_default(&tx)?,
        };
        let id = insert(
            &tx,
            "INSERT INTO missae (name, missa_type_id) VALUES (?1, ?2)",
            params![name, missa_type_id],
        )?;
        tx.commit().map_err(from_rusqlite)?;
        Ok(id)
    }

    pub fn update_missa(
        conn: &Connection,
        id: i64,
        name: Option<&str>,
        missa_type_id: Option<i64>,
    ) -> Result<()> {
        let current = Self::get::<Missa>(conn, id)?;
        if let Some(n) = name {
            validation::validate_missa_name(n)?;
        }
        if let Some(mt) = missa_type_id {
            Self::require::<MissaType>(conn, mt)?;
        }
        update::<Missa, _>(
            conn,
            "UPDATE missae SET name = ?1, missa_type_id = ?2 WHERE id = ?3",
            params![
                name.unwrap_or(&current.name),
                missa_type_id.unwrap_or(current.missa_type_id),
                id
            ],
            id,
        )
    }

    /// Delete a Missa; assignments and their suggestions cascade
    pub fn delete_missa(conn: &Connection, id: i64) -> Result<()> {
        delete_by_id::<Missa>(conn, id)
    }

    pub fn missae_of_type(conn: &Connection, missa_type_id: i64) -> Result<Vec<Missa>> {
        Self::require::<MissaType>(conn, missa_type_id)?;
        let sql = format!("{} WHERE missa_type_id = ?1 ORDER BY id", Missa::SELECT);
        query_all(conn, &sql, [missa_type_id], Missa::from_row)
    }

    // ===== Antiphona =====

    pub fn create_antiphona(conn: &Connection, name: &str, text: &str) -> Result<i64> {
        validation::validate_antiphona(name, text)?;
        insert(
            conn,
            "INSERT INTO antiphonae (name, text) VALUES (?1, ?2)",
            params![name, text],
        )
    }

    pub fn update_antiphona(
        conn: &Connection,
        id: i64,
        name: Option<&str>,
        text: Option<&str>,
    ) -> Result<()> {
        let current = Self::get::<Antiphona>(conn, id)?;
        let name = name.unwrap_or(&current.name);
        let text = text.unwrap_or(&current.text);
        validation::validate_antiphona(name, text)?;
        update::<Antiphona, _>(
            conn,
            "UPDATE antiphonae SET name = ?1, text = ?2 WHERE id = ?3",
            params![name, text, id],
            id,
        )
    }

    /// Delete an Antiphona; assignments and their suggestions cascade
    pub fn delete_antiphona(conn: &Connection, id: i64) -> Result<()> {
        delete_by_id::<Antiphona>(conn, id)
    }

    /// Distinct Antiphonae assigned to a Missa, by key
    pub fn antiphonae_of_missa(conn: &Connection, missa_id: i64) -> Result<Vec<Antiphona>> {
        Self::require::<Missa>(conn, missa_id)?;
        query_all(
            conn,
            "SELECT id, name, text FROM antiphonae
             WHERE id IN (SELECT antiphona_id FROM antiphona_missae WHERE missa_id = ?1)
             ORDER BY id",
            [missa_id],
            Antiphona::from_row,
        )
    }

    /// Distinct Missae an Antiphona is assigned to, by key
    pub fn missae_of_antiphona(conn: &Connection, antiphona_id: i64) -> Result<Vec<Missa>> {
        Self::require::<Antiphona>(conn, antiphona_id)?;
        query_all(
            conn,
            "SELECT id, name, missa_type_id FROM missae
             WHERE id IN (SELECT missa_id FROM antiphona_missae WHERE antiphona_id = ?1)
             ORDER BY id",
            [antiphona_id],
            Missa::from_row,
        )
    }

    // ===== AntiphonaMissa =====

    /// # Errors
    /// * `FieldTooLong` - evangelium, psalm or alt_psalm over 80 characters
    /// * `NotFound` - a referenced row is missing
    pub fn create_antiphona_missa(conn: &Connection, draft: &AntiphonaMissaDraft) -> Result<i64> {
        check_assignment(conn, draft)?;
        insert(
            conn,
            "INSERT INTO antiphona_missae (antiphona_id, missa_id, anno_id, evangelium,
                 antiphona_type_id, documentum_id, psalm, alt_psalm)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                draft.antiphona_id,
                draft.missa_id,
                draft.anno_id,
                draft.evangelium,
                draft.antiphona_type_id,
                draft.documentum_id,
                draft.psalm,
                draft.alt_psalm
            ],
        )
    }

    pub fn update_antiphona_missa(
        conn: &Connection,
        id: i64,
        draft: &AntiphonaMissaDraft,
    ) -> Result<()> {
        Self::require::<AntiphonaMissa>(conn, id)?;
        check_assignment(conn, draft)?;
        update::<AntiphonaMissa, _>(
            conn,
            "UPDATE antiphona_missae SET antiphona_id = ?1, missa_id = ?2, anno_id = ?3,
                 evangelium = ?4, antiphona_type_id = ?5, documentum_id = ?6, psalm = ?7,
                 alt_psalm = ?8
             WHERE id = ?9",
            params![
                draft.antiphona_id,
                draft.missa_id,
                draft.anno_id,
                draft.evangelium,
                draft.antiphona_type_id,
                draft.documentum_id,
                draft.psalm,
                draft.alt_psalm,
                id
            ],
            id,
        )
    }

    /// Delete an assignment; its suggestions cascade
    pub fn delete_antiphona_missa(conn: &Connection, id: i64) -> Result<()> {
        delete_by_id::<AntiphonaMissa>(conn, id)
    }

    pub fn assignments_of_missa(conn: &Connection, missa_id: i64) -> Result<Vec<AntiphonaMissa>> {
        Self::require::<Missa>(conn, missa_id)?;
        let sql = format!("{} WHERE missa_id = ?1 ORDER BY id", AntiphonaMissa::SELECT);
        query_all(conn, &sql, [missa_id], AntiphonaMissa::from_row)
    }

    pub fn assignments_of_antiphona(
        conn: &Connection,
        antiphona_id: i64,
    ) -> Result<Vec<AntiphonaMissa>> {
        Self::require::<Antiphona>(conn, antiphona_id)?;
        let sql = format!("{} WHERE antiphona_id = ?1 ORDER BY id", AntiphonaMissa::SELECT);
        query_all(conn, &sql, [antiphona_id], AntiphonaMissa::from_row)
    }

    // ===== Suggestion =====

    /// # Errors
    /// * `FieldRequired` / `FieldTooLong` / `InvalidUrl` / `InvalidSimilarity`
    /// * `NotFound` - the AntiphonaMissa does not exist
    pub fn create_suggestion(conn: &Connection, draft: &SuggestionDraft) -> Result<i64> {
        validation::validate_suggestion(draft)?;
        Self::require::<AntiphonaMissa>(conn, draft.antiphona_missa_id)?;
        insert(
            conn,
            "INSERT INTO suggestions (song_name, author, audio_link, sheet_link, similarity,
                 antiphona_missa_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                draft.song_name,
                draft.author,
                draft.audio_link,
                draft.sheet_link,
                draft.similarity.to_string(),
                draft.antiphona_missa_id
            ],
        )
    }

    pub fn update_suggestion(conn: &Connection, id: i64, draft: &SuggestionDraft) -> Result<()> {
        Self::require::<Suggestion>(conn, id)?;
        validation::validate_suggestion(draft)?;
        Self::require::<AntiphonaMissa>(conn, draft.antiphona_missa_id)?;
        update::<Suggestion, _>(
            conn,
            "UPDATE suggestions SET song_name = ?1, author = ?2, audio_link = ?3,
                 sheet_link = ?4, similarity = ?5, antiphona_missa_id = ?6
             WHERE id = ?7",
            params![
                draft.song_name,
                draft.author,
                draft.audio_link,
                draft.sheet_link,
                draft.similarity.to_string(),
                draft.antiphona_missa_id,
                id
            ],
            id,
        )
    }

    pub fn delete_suggestion(conn: &Connection, id: i64) -> Result<()> {
        delete_by_id::<Suggestion>(conn, id)
    }

    pub fn suggestions_of(conn: &Connection, antiphona_missa_id: i64) -> Result<Vec<Suggestion>> {
        Self::require::<AntiphonaMissa>(conn, antiphona_missa_id)?;
        let sql = format!("{} WHERE antiphona_missa_id = ?1 ORDER BY id", Suggestion::SELECT);
        query_all(conn, &sql, [antiphona_missa_id], Suggestion::from_row)
    }

    // ===== Dispatch =====

    /// Delete a row of any kind with that kind's deletion semantics
    pub fn delete(conn: &mut Connection, kind: EntityKind, id: i64) -> Result<()> {
        match kind {
            EntityKind::Anno => Self::delete_anno(conn, id),
            EntityKind::AntiphonaType => Self::delete_antiphona_type(conn, id),
            EntityKind::Documentum => Self::delete_documentum(conn, id),
            EntityKind::MissaType => Self::delete_missa_type(conn, id).map(|_| ()),
            EntityKind::MissaTypeAntiphonaType => Self::remove_member(conn, id),
            EntityKind::Missa => Self::delete_missa(conn, id),
            EntityKind::Antiphona => Self::delete_antiphona(conn, id),
            EntityKind::AntiphonaMissa => Self::delete_antiphona_missa(conn, id),
            EntityKind::Suggestion => Self::delete_suggestion(conn, id),
        }
    }
}

fn immediate(conn: &mut Connection) -> Result<Transaction<'_>> {
    conn.transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(from_rusqlite)
}

fn insert<P: Params>(conn: &Connection, sql: &str, params: P) -> Result<i64> {
    conn.execute(sql, params).map_err(from_rusqlite)?;
    Ok(conn.last_insert_rowid())
}

fn update<T: Persisted, P: Params>(conn: &Connection, sql: &str, params: P, id: i64) -> Result<()> {
    let changed = conn.execute(sql, params).map_err(from_rusqlite)?;
    if changed == 0 {
        return Err(CatalogError::NotFound {
            entity: T::NAME,
            id,
        }
        .into());
    }
    Ok(())
}

fn delete_by_id<T: Persisted>(conn: &Connection, id: i64) -> Result<()> {
    let sql = format!("DELETE FROM {} WHERE id = ?1", T::KIND.table());
    update::<T, _>(conn, &sql, [id], id)
}

fn query_all<T, P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
    map: fn(&rusqlite::Row<'_>) -> rusqlite::Result<T>,
) -> Result<Vec<T>> {
    let mut stmt = conn.prepare(sql).map_err(from_rusqlite)?;
    let rows = stmt
        .query_map(params, map)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<T>, _>>()
        .map_err(from_rusqlite)?;
    Ok(rows)
}

fn count_where<P: Params>(conn: &Connection, sql: &str, params: P) -> Result<usize> {
    let n: i64 = conn
        .query_row(sql, params, |row| row.get(0))
        .map_err(from_rusqlite)?;
    Ok(usize::try_from(n).unwrap_or(0))
}

/// Refuse the delete while assignments reference the row through `column`
fn protect<T: Persisted>(conn: &Connection, column: &str, id: i64) -> Result<()> {
    let sql = format!("SELECT COUNT(*) FROM antiphona_missae WHERE {} = ?1", column);
    let references = count_where(conn, &sql, [id])?;
    if references > 0 {
        return Err(CatalogError::Protected {
            entity: T::NAME,
            id,
            references,
        }
        .into());
    }
    Ok(())
}

fn find_default(conn: &Connection) -> Result<Option<i64>> {
    conn.query_row(
        "SELECT id FROM missa_types WHERE name = ?1",
        [DEFAULT_MISSA_TYPE_NAME],
        |row| row.get(0),
    )
    .optional()
    .map_err(from_rusqlite)
}

pub(crate) fn ensure_default(conn: &Connection) -> Result<i64> {
    let inserted = conn
        .execute(
            "INSERT OR IGNORE INTO missa_types (name) VALUES (?1)",
            [DEFAULT_MISSA_TYPE_NAME],
        )
        .map_err(from_rusqlite)?;
    if inserted > 0 {
        debug!("default missa type created");
    }
    find_default(conn)?.ok_or_else(|| {
        CatalogError::DefaultMissaTypeMissing {
            name: DEFAULT_MISSA_TYPE_NAME.to_string(),
        }
        .into()
    })
}

fn reserved_name(name: &str) -> antiphonale_core::ExError {
    CatalogError::ReservedMissaTypeName {
        name: name.to_string(),
    }
    .into()
}

fn default_conflict(err: rusqlite::Error, name: &str) -> antiphonale_core::ExError {
    if is_unique_violation(&err) {
        CatalogError::DefaultMissaTypeExists {
            name: name.to_string(),
        }
        .into()
    } else {
        from_rusqlite(err)
    }
}

fn order_conflict(err: rusqlite::Error, missa_type_id: i64, order: u16) -> antiphonale_core::ExError {
    if is_unique_violation(&err) {
        CatalogError::DuplicateOrder {
            missa_type_id,
            order,
        }
        .into()
    } else {
        from_rusqlite(err)
    }
}

fn check_assignment(conn: &Connection, draft: &AntiphonaMissaDraft) -> Result<()> {
    validation::validate_antiphona_missa(draft)?;
    SqliteRepo::require::<Antiphona>(conn, draft.antiphona_id)?;
    SqliteRepo::require::<Missa>(conn, draft.missa_id)?;
    if let Some(anno_id) = draft.anno_id {
        SqliteRepo::require::<Anno>(conn, anno_id)?;
    }
    SqliteRepo::require::<AntiphonaType>(conn, draft.antiphona_type_id)?;
    SqliteRepo::require::<Documentum>(conn, draft.documentum_id)?;
    Ok(())
}
