//! Row mapping between catalog entities and their tables

use std::str::FromStr;

use antiphonale_core::model::{
    Anno, Antiphona, AntiphonaMissa, AntiphonaType, Documentum, Entity, Missa, MissaType,
    MissaTypeAntiphonaType, Suggestion,
};
use rusqlite::types::Type;
use rusqlite::Row;
use rust_decimal::Decimal;

/// An entity that can be read back from its table
pub trait Persisted: Entity + Sized {
    /// `SELECT <columns> FROM <table>` with columns in `from_row` order
    const SELECT: &'static str;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

impl Persisted for Anno {
    const SELECT: &'static str = "SELECT id, name FROM annos";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Anno::new(row.get(0)?, row.get(1)?))
    }
}

impl Persisted for AntiphonaType {
    const SELECT: &'static str = "SELECT id, name FROM antiphona_types";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(AntiphonaType::new(row.get(0)?, row.get(1)?))
    }
}

impl Persisted for MissaType {
    const SELECT: &'static str = "SELECT id, name FROM missa_types";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(MissaType::new(row.get(0)?, row.get(1)?))
    }
}

impl Persisted for MissaTypeAntiphonaType {
    const SELECT: &'static str =
        "SELECT id, missa_type_id, antiphona_type_id, \"order\" FROM missa_type_antiphona_types";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(MissaTypeAntiphonaType::new(
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
        ))
    }
}

impl Persisted for Missa {
    const SELECT: &'static str = "SELECT id, name, missa_type_id FROM missae";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Missa::new(row.get(0)?, row.get(1)?, row.get(2)?))
    }
}

impl Persisted for Antiphona {
    const SELECT: &'static str = "SELECT id, name, text FROM antiphonae";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Antiphona::new(row.get(0)?, row.get(1)?, row.get(2)?))
    }
}

impl Persisted for Documentum {
    const SELECT: &'static str = "SELECT id, name FROM documenta";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Documentum::new(row.get(0)?, row.get(1)?))
    }
}

impl Persisted for AntiphonaMissa {
    const SELECT: &'static str = "SELECT id, antiphona_id, missa_id, anno_id, evangelium, \
         antiphona_type_id, documentum_id, psalm, alt_psalm FROM antiphona_missae";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(AntiphonaMissa {
            id: row.get(0)?,
            antiphona_id: row.get(1)?,
            missa_id: row.get(2)?,
            anno_id: row.get(3)?,
            evangelium: row.get(4)?,
            antiphona_type_id: row.get(5)?,
            documentum_id: row.get(6)?,
            psalm: row.get(7)?,
            alt_psalm: row.get(8)?,
        })
    }
}

impl Persisted for Suggestion {
    const SELECT: &'static str = "SELECT id, song_name, author, audio_link, sheet_link, \
         similarity, antiphona_missa_id FROM suggestions";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let similarity: String = row.get(5)?;
        let similarity = Decimal::from_str(&similarity)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e)))?;
        Ok(Suggestion {
            id: row.get(0)?,
            song_name: row.get(1)?,
            author: row.get(2)?,
            audio_link: row.get(3)?,
            sheet_link: row.get(4)?,
            similarity,
            antiphona_missa_id: row.get(6)?,
        })
    }
}
