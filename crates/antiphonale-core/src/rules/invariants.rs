//! Store-wide referential invariants
//!
//! The operations in `ops` keep these true on their own. `validate_store`
//! re-checks a whole store, which matters for stores assembled by other
//! means (hydration from SQLite, test helpers using `Store::insert`).

use std::collections::HashSet;

use crate::errors::{CatalogError, Result};
use crate::model::{
    Anno, Antiphona, AntiphonaMissa, AntiphonaType, Documentum, Missa, MissaType,
    MissaTypeAntiphonaType, Suggestion,
};
use crate::ops::Store;

/// Find memberships whose order repeats within their MissaType
///
/// Returns `(missa_type_id, order)` pairs, one per repeat.
pub fn find_duplicate_orders(store: &Store) -> Vec<(i64, u16)> {
    let mut seen = HashSet::new();
    store
        .list::<MissaTypeAntiphonaType>()
        .into_iter()
        .filter(|m| !seen.insert((m.missa_type_id, m.order)))
        .map(|m| (m.missa_type_id, m.order))
        .collect()
}

/// Find Missae pointing at a MissaType that does not exist
pub fn find_missae_without_type(store: &Store) -> Vec<(i64, i64)> {
    store
        .list::<Missa>()
        .into_iter()
        .filter(|m| !store.contains::<MissaType>(m.missa_type_id))
        .map(|m| (m.id, m.missa_type_id))
        .collect()
}

/// Count MissaType rows carrying the default name
pub fn count_default_missa_types(store: &Store) -> usize {
    store
        .list::<MissaType>()
        .into_iter()
        .filter(|mt| mt.is_default())
        .count()
}

/// Validate every foreign key and uniqueness rule in the store
///
/// # Errors
/// Returns the first violation found: `NotFound` for a dangling reference
/// (naming the missing row), `DuplicateOrder` for a repeated membership
/// order, `DefaultMissaTypeExists` for a second default row.
pub fn validate_store(store: &Store) -> Result<()> {
    for m in store.list::<MissaTypeAntiphonaType>() {
        store.require::<MissaType>(m.missa_type_id)?;
        store.require::<AntiphonaType>(m.antiphona_type_id)?;
    }

    if let Some((missa_type_id, order)) = find_duplicate_orders(store).first() {
        return Err(CatalogError::DuplicateOrder {
            missa_type_id: *missa_type_id,
            order: *order,
        });
    }

    if let Some((_, missa_type_id)) = find_missae_without_type(store).first() {
        return Err(CatalogError::NotFound {
            entity: "MissaType",
            id: *missa_type_id,
        });
    }

    if count_default_missa_types(store) > 1 {
        return Err(CatalogError::DefaultMissaTypeExists {
            name: crate::model::DEFAULT_MISSA_TYPE_NAME.to_string(),
        });
    }

    for am in store.list::<AntiphonaMissa>() {
        store.require::<Antiphona>(am.antiphona_id)?;
        store.require::<Missa>(am.missa_id)?;
        if let Some(anno_id) = am.anno_id {
            store.require::<Anno>(anno_id)?;
        }
        store.require::<AntiphonaType>(am.antiphona_type_id)?;
        store.require::<Documentum>(am.documentum_id)?;
    }

    for s in store.list::<Suggestion>() {
        store.require::<AntiphonaMissa>(s.antiphona_missa_id)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_is_valid() {
        assert!(validate_store(&Store::new()).is_ok());
    }

    #[test]
    fn test_dangling_missa_type() {
        let mut store = Store::new();
        store.insert(Missa::new(1, "Dominica II".to_string(), 77));
        assert_eq!(find_missae_without_type(&store), vec![(1, 77)]);
        assert_eq!(
            validate_store(&store),
            Err(CatalogError::NotFound {
                entity: "MissaType",
                id: 77
            })
        );
    }

    #[test]
    fn test_duplicate_orders_detected() {
        let mut store = Store::new();
        store.insert(MissaType::new(1, "Feria".to_string()));
        store.insert(AntiphonaType::new(1, "Introito".to_string()));
        store.insert(AntiphonaType::new(2, "Communio".to_string()));
        store.insert(MissaTypeAntiphonaType::new(1, 1, 1, 3));
        store.insert(MissaTypeAntiphonaType::new(2, 1, 2, 3));

        assert_eq!(find_duplicate_orders(&store), vec![(1, 3)]);
        assert!(matches!(
            validate_store(&store),
            Err(CatalogError::DuplicateOrder { .. })
        ));
    }

    #[test]
    fn test_orphaned_suggestion() {
        let mut store = Store::new();
        store.insert(Suggestion::from_draft(
            1,
            crate::model::SuggestionDraft {
                song_name: "Ad te levavi".to_string(),
                antiphona_missa_id: 4,
                ..Default::default()
            },
        ));
        assert!(validate_store(&store).is_err());
    }
}
