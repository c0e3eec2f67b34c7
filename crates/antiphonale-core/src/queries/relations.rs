use std::collections::BTreeSet;

use crate::errors::Result;
use crate::model::{
    Antiphona, AntiphonaMissa, AntiphonaType, Missa, MissaType, MissaTypeAntiphonaType,
    Suggestion,
};
use crate::ops::Store;

/// Memberships of a MissaType, ascending by order
///
/// # Errors
/// * `NotFound` - no such MissaType
pub fn members_of(store: &Store, missa_type_id: i64) -> Result<Vec<&MissaTypeAntiphonaType>> {
    store.require::<MissaType>(missa_type_id)?;
    let mut members: Vec<_> = store
        .list::<MissaTypeAntiphonaType>()
        .into_iter()
        .filter(|m| m.missa_type_id == missa_type_id)
        .collect();
    members.sort_by_key(|m| m.order);
    Ok(members)
}

/// AntiphonaTypes of a MissaType, ascending by membership order
///
/// # Errors
/// * `NotFound` - no such MissaType, or a membership points at a missing type
pub fn ordered_antiphona_types(store: &Store, missa_type_id: i64) -> Result<Vec<&AntiphonaType>> {
    members_of(store, missa_type_id)?
        .into_iter()
        .map(|m| store.get::<AntiphonaType>(m.antiphona_type_id))
        .collect()
}

/// Missae filed under a MissaType, by key
///
/// # Errors
/// * `NotFound` - no such MissaType
pub fn missae_of_type(store: &Store, missa_type_id: i64) -> Result<Vec<&Missa>> {
    store.require::<MissaType>(missa_type_id)?;
    Ok(store
        .list::<Missa>()
        .into_iter()
        .filter(|m| m.missa_type_id == missa_type_id)
        .collect())
}

/// Assignments of a Missa, by key
///
/// # Errors
/// * `NotFound` - no such Missa
pub fn assignments_of_missa(store: &Store, missa_id: i64) -> Result<Vec<&AntiphonaMissa>> {
    store.require::<Missa>(missa_id)?;
    Ok(store
        .list::<AntiphonaMissa>()
        .into_iter()
        .filter(|am| am.missa_id == missa_id)
        .collect())
}

/// Assignments of an Antiphona, by key
///
/// # Errors
/// * `NotFound` - no such Antiphona
pub fn assignments_of_antiphona(store: &Store, antiphona_id: i64) -> Result<Vec<&AntiphonaMissa>> {
    store.require::<Antiphona>(antiphona_id)?;
    Ok(store
        .list::<AntiphonaMissa>()
        .into_iter()
        .filter(|am| am.antiphona_id == antiphona_id)
        .collect())
}

/// Distinct Antiphonae assigned to a Missa, by key
///
/// # Errors
/// * `NotFound` - no such Missa
pub fn antiphonae_of_missa(store: &Store, missa_id: i64) -> Result<Vec<&Antiphona>> {
    let ids: BTreeSet<i64> = assignments_of_missa(store, missa_id)?
        .into_iter()
        .map(|am| am.antiphona_id)
        .collect();
    ids.into_iter().map(|id| store.get::<Antiphona>(id)).collect()
}

/// Distinct Missae an Antiphona is assigned to, by key
///
/// # Errors
/// * `NotFound` - no such Antiphona
pub fn missae_of_antiphona(store: &Store, antiphona_id: i64) -> Result<Vec<&Missa>> {
    let ids: BTreeSet<i64> = assignments_of_antiphona(store, antiphona_id)?
        .into_iter()
        .map(|am| am.missa_id)
        .collect();
    ids.into_iter().map(|id| store.get::<Missa>(id)).collect()
}

/// Suggestions for an assignment, by key
///
/// # Errors
/// * `NotFound` - no such AntiphonaMissa
pub fn suggestions_of(store: &Store, antiphona_missa_id: i64) -> Result<Vec<&Suggestion>> {
    store.require::<AntiphonaMissa>(antiphona_missa_id)?;
    Ok(store
        .list::<Suggestion>()
        .into_iter()
        .filter(|s| s.antiphona_missa_id == antiphona_missa_id)
        .collect())
}
