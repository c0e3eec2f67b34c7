//! AntiphonaMissa operations
//!
//! Creating an assignment checks every foreign key against the store.
//! Deleting one, directly or through its Antiphona or Missa, takes its
//! Suggestions along.

use tracing::debug;

use super::store::Store;
use crate::errors::Result;
use crate::model::{
    Anno, Antiphona, AntiphonaMissa, AntiphonaMissaDraft, AntiphonaType, Documentum, Missa,
    Suggestion,
};
use crate::rules::validation;

/// Create a new AntiphonaMissa
///
/// # Errors
/// * `FieldTooLong` - evangelium, psalm or alt_psalm over 80 characters
/// * `NotFound` - any referenced row does not exist
pub fn create_antiphona_missa(store: &mut Store, draft: AntiphonaMissaDraft) -> Result<i64> {
    check_draft(store, &draft)?;
    let id = store.next_id::<AntiphonaMissa>();
    store.insert(AntiphonaMissa::from_draft(id, draft));
    Ok(id)
}

/// Read an AntiphonaMissa by key
///
/// # Errors
/// * `NotFound` - no such AntiphonaMissa
pub fn read_antiphona_missa(store: &Store, id: i64) -> Result<&AntiphonaMissa> {
    store.get::<AntiphonaMissa>(id)
}

/// Replace all fields of an AntiphonaMissa
///
/// # Errors
/// * `NotFound` - no such AntiphonaMissa, or a referenced row is missing
/// * `FieldTooLong` - as for create
pub fn update_antiphona_missa(
    store: &mut Store,
    id: i64,
    draft: AntiphonaMissaDraft,
) -> Result<()> {
    store.require::<AntiphonaMissa>(id)?;
    check_draft(store, &draft)?;
    *store.get_mut::<AntiphonaMissa>(id)? = AntiphonaMissa::from_draft(id, draft);
    Ok(())
}

/// Delete an AntiphonaMissa and its Suggestions
///
/// # Errors
/// * `NotFound` - no such AntiphonaMissa
pub fn delete_antiphona_missa(store: &mut Store, id: i64) -> Result<()> {
    store.require::<AntiphonaMissa>(id)?;
    cascade_assignments(store, |am| am.id == id);
    Ok(())
}

/// Remove the matching assignments and every Suggestion hanging off them
///
/// Returns the number of assignments removed.
pub(crate) fn cascade_assignments(
    store: &mut Store,
    pred: impl Fn(&AntiphonaMissa) -> bool,
) -> usize {
    let removed = store.remove_where::<AntiphonaMissa>(pred);
    let suggestions =
        store.remove_where::<Suggestion>(|s| removed.contains(&s.antiphona_missa_id));
    if !removed.is_empty() {
        debug!(
            cascaded = removed.len(),
            suggestions = suggestions.len(),
            "assignments cascaded"
        );
    }
    removed.len()
}

fn check_draft(store: &Store, draft: &AntiphonaMissaDraft) -> Result<()> {
    validation::validate_antiphona_missa(draft)?;
    store.require::<Antiphona>(draft.antiphona_id)?;
    store.require::<Missa>(draft.missa_id)?;
    if let Some(anno_id) = draft.anno_id {
        store.require::<Anno>(anno_id)?;
    }
    store.require::<AntiphonaType>(draft.antiphona_type_id)?;
    store.require::<Documentum>(draft.documentum_id)?;
    Ok(())
}
