//! MissaType operations and its ordered AntiphonaType memberships

use tracing::debug;

use super::store::Store;
use crate::errors::{CatalogError, Result};
use crate::model::{
    AntiphonaType, Missa, MissaType, MissaTypeAntiphonaType, DEFAULT_MISSA_TYPE_NAME,
};
use crate::policy::DefaultMissaTypeResolver;
use crate::rules::validation;

/// Create a new MissaType
///
/// The default name is reserved: only `resolve_default_missa_type` creates
/// the row that carries it.
///
/// # Errors
/// * `FieldRequired` / `FieldTooLong` - invalid name
/// * `ReservedMissaTypeName` - name is the default name
pub fn create_missa_type(store: &mut Store, name: String) -> Result<i64> {
    validation::validate_missa_type_name(&name)?;
    reject_reserved_name(store, &name, None)?;

    let id = store.next_id::<MissaType>();
    store.insert(MissaType::new(id, name));
    Ok(id)
}

/// Rename a MissaType
///
/// # Errors
/// * `NotFound` - no such MissaType
/// * `FieldRequired` / `FieldTooLong` - invalid name
/// * `ReservedMissaTypeName` - renaming another row onto the default name
pub fn update_missa_type(store: &mut Store, id: i64, name: String) -> Result<()> {
    validation::validate_missa_type_name(&name)?;
    store.require::<MissaType>(id)?;
    reject_reserved_name(store, &name, Some(id))?;

    store.get_mut::<MissaType>(id)?.name = name;
    Ok(())
}

/// Look up or create the default MissaType ("Dominica")
///
/// Idempotent: the first call creates the row with no memberships, later
/// calls return the same key.
///
/// # Errors
/// Only if the default name itself fails validation, which it does not.
pub fn resolve_default_missa_type(store: &mut Store) -> Result<i64> {
    if let Some(existing) = default_missa_type(store) {
        return Ok(existing.id);
    }

    validation::validate_missa_type_name(DEFAULT_MISSA_TYPE_NAME)?;
    let id = store.next_id::<MissaType>();
    store.insert(MissaType::new(id, DEFAULT_MISSA_TYPE_NAME.to_string()));
    debug!(missa_type_id = id, "default missa type created");
    Ok(id)
}

/// Strict lookup of the default MissaType, never creating it
///
/// # Errors
/// * `DefaultMissaTypeMissing` - no row carries the default name
pub fn find_default_missa_type(store: &Store) -> Result<i64> {
    default_missa_type(store)
        .map(|mt| mt.id)
        .ok_or_else(|| CatalogError::DefaultMissaTypeMissing {
            name: DEFAULT_MISSA_TYPE_NAME.to_string(),
        })
}

/// Delete a MissaType, re-pointing its Missae at the default
///
/// Memberships of the deleted type are removed. Every Missa that referenced
/// it is rewritten to whatever `resolver` returns, resolved after the
/// deletion, so deleting the default row itself yields a fresh default row.
/// The whole change is computed on a scratch copy and committed at the end:
/// on error `store` is left untouched.
///
/// # Errors
/// * `NotFound` - no such MissaType
/// * Any error from `resolver`
pub fn delete_missa_type(
    store: &mut Store,
    id: i64,
    resolver: &dyn DefaultMissaTypeResolver,
) -> Result<()> {
    store.require::<MissaType>(id)?;

    let mut next = store.clone();
    let memberships = next.remove_where::<MissaTypeAntiphonaType>(|m| m.missa_type_id == id);
    next.remove::<MissaType>(id);

    let orphans: Vec<i64> = next
        .list::<Missa>()
        .into_iter()
        .filter(|m| m.missa_type_id == id)
        .map(|m| m.id)
        .collect();

    if !orphans.is_empty() {
        let fallback = resolver.resolve(&mut next)?;
        if fallback == id {
            return Err(CatalogError::Internal {
                message: format!("resolver returned deleted MissaType {}", id),
            });
        }
        next.require::<MissaType>(fallback)?;
        for missa_id in &orphans {
            next.get_mut::<Missa>(*missa_id)?.missa_type_id = fallback;
        }
    }

    *store = next;
    debug!(
        missa_type_id = id,
        cascaded = memberships.len(),
        rewritten = orphans.len(),
        "missa type deleted"
    );
    Ok(())
}

/// Add an AntiphonaType to a MissaType at the given order
///
/// # Errors
/// * `NotFound` - either side does not exist
/// * `InvalidOrder` - order is 0 or above the small-integer range
/// * `DuplicateOrder` - another member of this MissaType already has `order`
pub fn add_member(
    store: &mut Store,
    missa_type_id: i64,
    antiphona_type_id: i64,
    order: u16,
) -> Result<i64> {
    validation::check_order(order)?;
    store.require::<MissaType>(missa_type_id)?;
    store.require::<AntiphonaType>(antiphona_type_id)?;
    reject_duplicate_order(store, missa_type_id, order, None)?;

    let id = store.next_id::<MissaTypeAntiphonaType>();
    store.insert(MissaTypeAntiphonaType::new(
        id,
        missa_type_id,
        antiphona_type_id,
        order,
    ));
    Ok(id)
}

/// Move a membership to a new order
///
/// # Errors
/// * `NotFound` - no such membership
/// * `InvalidOrder` / `DuplicateOrder` - as for `add_member`
pub fn update_member_order(store: &mut Store, membership_id: i64, order: u16) -> Result<()> {
    validation::check_order(order)?;
    let missa_type_id = store
        .get::<MissaTypeAntiphonaType>(membership_id)?
        .missa_type_id;
    reject_duplicate_order(store, missa_type_id, order, Some(membership_id))?;

    store
        .get_mut::<MissaTypeAntiphonaType>(membership_id)?
        .order = order;
    Ok(())
}

/// Remove a membership
///
/// # Errors
/// * `NotFound` - no such membership
pub fn remove_member(store: &mut Store, membership_id: i64) -> Result<()> {
    store
        .remove::<MissaTypeAntiphonaType>(membership_id)
        .map(|_| ())
        .ok_or(CatalogError::NotFound {
            entity: "MissaTypeAntiphonaType",
            id: membership_id,
        })
}

fn default_missa_type(store: &Store) -> Option<&MissaType> {
    store
        .list::<MissaType>()
        .into_iter()
        .find(|mt| mt.is_default())
}

// The default row may keep its own name on update; nothing else may take it
fn reject_reserved_name(store: &Store, name: &str, own_id: Option<i64>) -> Result<()> {
    if name != DEFAULT_MISSA_TYPE_NAME {
        return Ok(());
    }
    let is_default_row = own_id
        .and_then(|id| store.get::<MissaType>(id).ok())
        .is_some_and(|mt| mt.is_default());
    if is_default_row {
        return Ok(());
    }
    Err(CatalogError::ReservedMissaTypeName {
        name: name.to_string(),
    })
}

fn reject_duplicate_order(
    store: &Store,
    missa_type_id: i64,
    order: u16,
    own_id: Option<i64>,
) -> Result<()> {
    let taken = store.list::<MissaTypeAntiphonaType>().into_iter().any(|m| {
        m.missa_type_id == missa_type_id && m.order == order && Some(m.id) != own_id
    });
    if taken {
        return Err(CatalogError::DuplicateOrder {
            missa_type_id,
            order,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::reference_ops;
    use crate::policy::DominicaResolver;

    #[test]
    fn test_resolve_creates_once() {
        let mut store = Store::new();
        assert!(find_default_missa_type(&store).is_err());

        let id = resolve_default_missa_type(&mut store).unwrap();
        assert_eq!(find_default_missa_type(&store).unwrap(), id);
        assert_eq!(resolve_default_missa_type(&mut store).unwrap(), id);
        assert_eq!(store.count::<MissaType>(), 1);
    }

    #[test]
    fn test_second_default_is_refused() {
        let mut store = Store::new();
        resolve_default_missa_type(&mut store).unwrap();
        let result = create_missa_type(&mut store, "Dominica".to_string());
        assert!(matches!(
            result,
            Err(CatalogError::ReservedMissaTypeName { .. })
        ));
    }

    #[test]
    fn test_default_name_reserved_before_default_exists() {
        // Given: an empty store with no default row
        let mut store = Store::new();

        // When: creating a MissaType under the default name directly
        let result = create_missa_type(&mut store, "Dominica".to_string());

        // Then: it is refused and nothing is stored
        assert!(matches!(
            result,
            Err(CatalogError::ReservedMissaTypeName { .. })
        ));
        assert_eq!(store.count::<MissaType>(), 0);

        // and renaming another row onto it is refused as well
        let feria = create_missa_type(&mut store, "Feria".to_string()).unwrap();
        assert!(update_missa_type(&mut store, feria, "Dominica".to_string()).is_err());
        assert!(find_default_missa_type(&store).is_err());
    }

    #[test]
    fn test_renaming_default_keeps_its_name_allowed() {
        let mut store = Store::new();
        let id = resolve_default_missa_type(&mut store).unwrap();
        update_missa_type(&mut store, id, "Dominica".to_string()).unwrap();
    }

    #[test]
    fn test_same_order_in_different_types() {
        let mut store = Store::new();
        let dominica = resolve_default_missa_type(&mut store).unwrap();
        let feria = create_missa_type(&mut store, "Feria".to_string()).unwrap();
        let introito =
            reference_ops::create_antiphona_type(&mut store, "Introito".to_string()).unwrap();

        add_member(&mut store, dominica, introito, 1).unwrap();
        add_member(&mut store, feria, introito, 1).unwrap();
    }

    #[test]
    fn test_update_order_to_own_value() {
        let mut store = Store::new();
        let dominica = resolve_default_missa_type(&mut store).unwrap();
        let introito =
            reference_ops::create_antiphona_type(&mut store, "Introito".to_string()).unwrap();
        let m = add_member(&mut store, dominica, introito, 1).unwrap();

        update_member_order(&mut store, m, 1).unwrap();
        update_member_order(&mut store, m, 5).unwrap();
        assert_eq!(store.get::<MissaTypeAntiphonaType>(m).unwrap().order, 5);
    }

    #[test]
    fn test_delete_type_without_missae_does_not_create_default() {
        let mut store = Store::new();
        let feria = create_missa_type(&mut store, "Feria".to_string()).unwrap();
        delete_missa_type(&mut store, feria, &DominicaResolver).unwrap();
        assert_eq!(store.count::<MissaType>(), 0);
    }
}
