//! Display text for catalog rows
//!
//! Self-contained rows implement `Display` in `model`. The junction rows and
//! Suggestion need their referents, so their text is built from the store.

use crate::errors::Result;
use crate::model::{
    Anno, Antiphona, AntiphonaMissa, AntiphonaType, Documentum, EntityKind, Missa, MissaType,
    MissaTypeAntiphonaType, Suggestion,
};
use crate::ops::Store;

/// `"{missa_type} - ({order}) Antiphona ad {antiphona_type}"`
///
/// # Errors
/// * `NotFound` - a referent is missing
pub fn display_membership(store: &Store, membership: &MissaTypeAntiphonaType) -> Result<String> {
    let missa_type = store.get::<MissaType>(membership.missa_type_id)?;
    let antiphona_type = store.get::<AntiphonaType>(membership.antiphona_type_id)?;
    Ok(format!(
        "{} - ({}) {}",
        missa_type, membership.order, antiphona_type
    ))
}

/// `"{missa} - {antiphona}"`
///
/// # Errors
/// * `NotFound` - a referent is missing
pub fn display_antiphona_missa(store: &Store, am: &AntiphonaMissa) -> Result<String> {
    let missa = store.get::<Missa>(am.missa_id)?;
    let antiphona = store.get::<Antiphona>(am.antiphona_id)?;
    Ok(format!("{} - {}", missa, antiphona))
}

/// `"Suggestion: {song_name} - {author}, for {assignment}"`
///
/// # Errors
/// * `NotFound` - a referent is missing
pub fn display_suggestion(store: &Store, suggestion: &Suggestion) -> Result<String> {
    let am = store.get::<AntiphonaMissa>(suggestion.antiphona_missa_id)?;
    Ok(format!(
        "Suggestion: {} - {}, for {}",
        suggestion.song_name,
        suggestion.author,
        display_antiphona_missa(store, am)?
    ))
}

/// Display text of any row, addressed by kind and key
///
/// # Errors
/// * `NotFound` - the row or one of its referents is missing
pub fn display_text(store: &Store, kind: EntityKind, id: i64) -> Result<String> {
    match kind {
        EntityKind::Anno => Ok(store.get::<Anno>(id)?.to_string()),
        EntityKind::AntiphonaType => Ok(store.get::<AntiphonaType>(id)?.to_string()),
        EntityKind::MissaType => Ok(store.get::<MissaType>(id)?.to_string()),
        EntityKind::Missa => Ok(store.get::<Missa>(id)?.to_string()),
        EntityKind::Antiphona => Ok(store.get::<Antiphona>(id)?.to_string()),
        EntityKind::Documentum => Ok(store.get::<Documentum>(id)?.to_string()),
        EntityKind::MissaTypeAntiphonaType => {
            display_membership(store, store.get::<MissaTypeAntiphonaType>(id)?)
        }
        EntityKind::AntiphonaMissa => {
            display_antiphona_missa(store, store.get::<AntiphonaMissa>(id)?)
        }
        EntityKind::Suggestion => display_suggestion(store, store.get::<Suggestion>(id)?),
    }
}
