use super::assignment_ops;
use super::store::Store;
use crate::errors::Result;
use crate::model::Antiphona;
use crate::rules::validation;

/// Create a new Antiphona
///
/// # Errors
/// * `FieldRequired` / `FieldTooLong` - name (120) or text (300) invalid
pub fn create_antiphona(store: &mut Store, name: String, text: String) -> Result<i64> {
    validation::validate_antiphona(&name, &text)?;
    let id = store.next_id::<Antiphona>();
    store.insert(Antiphona::new(id, name, text));
    Ok(id)
}

/// Read an Antiphona by key
///
/// # Errors
/// * `NotFound` - no such Antiphona
pub fn read_antiphona(store: &Store, id: i64) -> Result<&Antiphona> {
    store.get::<Antiphona>(id)
}

/// Update an Antiphona's name and/or text
///
/// # Errors
/// * `NotFound` - no such Antiphona
/// * `FieldRequired` / `FieldTooLong` - invalid values
pub fn update_antiphona(
    store: &mut Store,
    id: i64,
    name: Option<String>,
    text: Option<String>,
) -> Result<()> {
    let current = store.get::<Antiphona>(id)?;
    let name = name.unwrap_or_else(|| current.name.clone());
    let text = text.unwrap_or_else(|| current.text.clone());
    validation::validate_antiphona(&name, &text)?;

    let antiphona = store.get_mut::<Antiphona>(id)?;
    antiphona.name = name;
    antiphona.text = text;
    Ok(())
}

/// Delete an Antiphona with its assignments and their suggestions
///
/// # Errors
/// * `NotFound` - no such Antiphona
pub fn delete_antiphona(store: &mut Store, id: i64) -> Result<()> {
    store.require::<Antiphona>(id)?;
    assignment_ops::cascade_assignments(store, |am| am.antiphona_id == id);
    store.remove::<Antiphona>(id);
    Ok(())
}
