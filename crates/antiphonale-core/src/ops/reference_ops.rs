//! Reference data: Anno, AntiphonaType, Documentum
//!
//! These rows are seeded once and rarely change. Deleting one is refused
//! while any AntiphonaMissa still points at it.

use tracing::debug;

use super::store::Store;
use crate::errors::{CatalogError, Result};
use crate::model::{Anno, AntiphonaMissa, AntiphonaType, Documentum, MissaTypeAntiphonaType};
use crate::rules::validation;

/// Create a new Anno
///
/// # Errors
/// * `FieldRequired` / `FieldTooLong` - name empty or over 2 characters
pub fn create_anno(store: &mut Store, name: String) -> Result<i64> {
    validation::validate_anno_name(&name)?;
    let id = store.next_id::<Anno>();
    store.insert(Anno::new(id, name));
    Ok(id)
}

/// Rename an Anno
///
/// # Errors
/// * `NotFound` - no such Anno
/// * `FieldRequired` / `FieldTooLong` - invalid name
pub fn update_anno(store: &mut Store, id: i64, name: String) -> Result<()> {
    validation::validate_anno_name(&name)?;
    store.get_mut::<Anno>(id)?.name = name;
    Ok(())
}

/// Delete an Anno that no assignment references
///
/// # Errors
/// * `NotFound` - no such Anno
/// * `Protected` - at least one AntiphonaMissa references it
pub fn delete_anno(store: &mut Store, id: i64) -> Result<()> {
    store.require::<Anno>(id)?;
    let references = count_assignments(store, |am| am.anno_id == Some(id));
    protect::<Anno>(id, references)?;

    store.remove::<Anno>(id);
    Ok(())
}

/// Create a new AntiphonaType
///
/// # Errors
/// * `FieldRequired` / `FieldTooLong` - name empty or over 40 characters
pub fn create_antiphona_type(store: &mut Store, name: String) -> Result<i64> {
    validation::validate_antiphona_type_name(&name)?;
    let id = store.next_id::<AntiphonaType>();
    store.insert(AntiphonaType::new(id, name));
    Ok(id)
}

/// Rename an AntiphonaType
///
/// # Errors
/// * `NotFound` - no such AntiphonaType
/// * `FieldRequired` / `FieldTooLong` - invalid name
pub fn update_antiphona_type(store: &mut Store, id: i64, name: String) -> Result<()> {
    validation::validate_antiphona_type_name(&name)?;
    store.get_mut::<AntiphonaType>(id)?.name = name;
    Ok(())
}

/// Delete an AntiphonaType that no assignment references
///
/// Its MissaType memberships go with it.
///
/// # Errors
/// * `NotFound` - no such AntiphonaType
/// * `Protected` - at least one AntiphonaMissa references it
pub fn delete_antiphona_type(store: &mut Store, id: i64) -> Result<()> {
    store.require::<AntiphonaType>(id)?;
    let references = count_assignments(store, |am| am.antiphona_type_id == id);
    protect::<AntiphonaType>(id, references)?;

    let memberships =
        store.remove_where::<MissaTypeAntiphonaType>(|m| m.antiphona_type_id == id);
    store.remove::<AntiphonaType>(id);
    debug!(
        antiphona_type_id = id,
        cascaded = memberships.len(),
        "antiphona type deleted"
    );
    Ok(())
}

/// Create a new Documentum
///
/// # Errors
/// * `FieldRequired` / `FieldTooLong` - name empty or over 20 characters
pub fn create_documentum(store: &mut Store, name: String) -> Result<i64> {
    validation::validate_documentum_name(&name)?;
    let id = store.next_id::<Documentum>();
    store.insert(Documentum::new(id, name));
    Ok(id)
}

/// Rename a Documentum
///
/// # Errors
/// * `NotFound` - no such Documentum
/// * `FieldRequired` / `FieldTooLong` - invalid name
pub fn update_documentum(store: &mut Store, id: i64, name: String) -> Result<()> {
    validation::validate_documentum_name(&name)?;
    store.get_mut::<Documentum>(id)?.name = name;
    Ok(())
}

/// Delete a Documentum that no assignment references
///
/// # Errors
/// * `NotFound` - no such Documentum
/// * `Protected` - at least one AntiphonaMissa references it
pub fn delete_documentum(store: &mut Store, id: i64) -> Result<()> {
    store.require::<Documentum>(id)?;
    let references = count_assignments(store, |am| am.documentum_id == id);
    protect::<Documentum>(id, references)?;

    store.remove::<Documentum>(id);
    Ok(())
}

fn count_assignments(store: &Store, pred: impl Fn(&AntiphonaMissa) -> bool) -> usize {
    store
        .list::<AntiphonaMissa>()
        .into_iter()
        .filter(|am| pred(am))
        .count()
}

fn protect<T: crate::model::Entity>(id: i64, references: usize) -> Result<()> {
    if references > 0 {
        return Err(CatalogError::Protected {
            entity: T::NAME,
            id,
            references,
        });
    }
    Ok(())
}
