use super::assignment_ops;
use super::store::Store;
use crate::errors::Result;
use crate::model::{Missa, MissaType};
use crate::policy::DefaultMissaTypeResolver;
use crate::rules::validation;

/// Create a new Missa
///
/// When `missa_type_id` is `None` the Missa is filed under whatever the
/// resolver supplies (normally "Dominica").
///
/// # Arguments
/// * `store` - Mutable reference to the Store
/// * `name` - Celebration name, at most 40 characters
/// * `missa_type_id` - Explicit MissaType, or `None` for the default
/// * `resolver` - Source of the default MissaType
///
/// # Errors
/// * `FieldRequired` / `FieldTooLong` - invalid name
/// * `NotFound` - explicit MissaType does not exist
pub fn create_missa(
    store: &mut Store,
    name: String,
    missa_type_id: Option<i64>,
    resolver: &dyn DefaultMissaTypeResolver,
) -> Result<i64> {
    validation::validate_missa_name(&name)?;
    let missa_type_id = match missa_type_id {
        Some(id) => {
            store.require::<MissaType>(id)?;
            id
        }
        None => resolver.resolve(store)?,
    };

    let id = store.next_id::<Missa>();
    store.insert(Missa::new(id, name, missa_type_id));
    Ok(id)
}

/// Read a Missa by key
///
/// # Errors
/// * `NotFound` - no such Missa
pub fn read_missa(store: &Store, id: i64) -> Result<&Missa> {
    store.get::<Missa>(id)
}

/// Update a Missa's name and/or MissaType
///
/// # Errors
/// * `NotFound` - no such Missa, or the new MissaType does not exist
/// * `FieldRequired` / `FieldTooLong` - invalid name
pub fn update_missa(
    store: &mut Store,
    id: i64,
    name: Option<String>,
    missa_type_id: Option<i64>,
) -> Result<()> {
    if let Some(ref n) = name {
        validation::validate_missa_name(n)?;
    }
    if let Some(mt) = missa_type_id {
        store.require::<MissaType>(mt)?;
    }

    let missa = store.get_mut::<Missa>(id)?;
    if let Some(n) = name {
        missa.name = n;
    }
    if let Some(mt) = missa_type_id {
        missa.missa_type_id = mt;
    }
    Ok(())
}

/// Delete a Missa with its assignments and their suggestions
///
/// # Errors
/// * `NotFound` - no such Missa
pub fn delete_missa(store: &mut Store, id: i64) -> Result<()> {
    store.require::<Missa>(id)?;
    assignment_ops::cascade_assignments(store, |am| am.missa_id == id);
    store.remove::<Missa>(id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CatalogError;
    use crate::ops::missa_type_ops;
    use crate::policy::DominicaResolver;

    #[test]
    fn test_create_missa_defaults_to_dominica() {
        let mut store = Store::new();
        let id = create_missa(
            &mut store,
            "Dominica I Adventus".to_string(),
            None,
            &DominicaResolver,
        )
        .unwrap();

        let missa = read_missa(&store, id).unwrap();
        let mt = store.get::<MissaType>(missa.missa_type_id).unwrap();
        assert_eq!(mt.name, "Dominica");
    }

    #[test]
    fn test_create_missa_with_unknown_type() {
        let mut store = Store::new();
        let result = create_missa(&mut store, "Feria II".to_string(), Some(99), &DominicaResolver);
        assert!(matches!(result, Err(CatalogError::NotFound { .. })));
        assert_eq!(store.count::<Missa>(), 0);
    }

    #[test]
    fn test_update_missa_type() {
        let mut store = Store::new();
        let feria = missa_type_ops::create_missa_type(&mut store, "Feria".to_string()).unwrap();
        let id = create_missa(&mut store, "Feria IV Cinerum".to_string(), None, &DominicaResolver)
            .unwrap();

        update_missa(&mut store, id, None, Some(feria)).unwrap();
        assert_eq!(read_missa(&store, id).unwrap().missa_type_id, feria);
        assert_eq!(read_missa(&store, id).unwrap().name, "Feria IV Cinerum");
    }
}
