use super::store::Store;
use crate::errors::{CatalogError, Result};
use crate::model::{AntiphonaMissa, Suggestion, SuggestionDraft};
use crate::rules::validation;

/// Create a new Suggestion for an AntiphonaMissa
///
/// # Errors
/// * `FieldRequired` / `FieldTooLong` - song name or author invalid
/// * `InvalidUrl` - a non-blank link is not an http(s) URL
/// * `InvalidSimilarity` - similarity does not fit NN.NN
/// * `NotFound` - the AntiphonaMissa does not exist
pub fn create_suggestion(store: &mut Store, draft: SuggestionDraft) -> Result<i64> {
    validation::validate_suggestion(&draft)?;
    store.require::<AntiphonaMissa>(draft.antiphona_missa_id)?;

    let id = store.next_id::<Suggestion>();
    store.insert(Suggestion::from_draft(id, draft));
    Ok(id)
}

/// Read a Suggestion by key
///
/// # Errors
/// * `NotFound` - no such Suggestion
pub fn read_suggestion(store: &Store, id: i64) -> Result<&Suggestion> {
    store.get::<Suggestion>(id)
}

/// Replace all fields of a Suggestion
///
/// # Errors
/// As for `create_suggestion`, plus `NotFound` for the Suggestion itself.
pub fn update_suggestion(store: &mut Store, id: i64, draft: SuggestionDraft) -> Result<()> {
    store.require::<Suggestion>(id)?;
    validation::validate_suggestion(&draft)?;
    store.require::<AntiphonaMissa>(draft.antiphona_missa_id)?;

    *store.get_mut::<Suggestion>(id)? = Suggestion::from_draft(id, draft);
    Ok(())
}

/// Delete a Suggestion
///
/// # Errors
/// * `NotFound` - no such Suggestion
pub fn delete_suggestion(store: &mut Store, id: i64) -> Result<()> {
    store
        .remove::<Suggestion>(id)
        .map(|_| ())
        .ok_or(CatalogError::NotFound {
            entity: "Suggestion",
            id,
        })
}
