use std::collections::BTreeMap;

use crate::errors::{CatalogError, Result};
use crate::model::{
    Anno, Antiphona, AntiphonaMissa, AntiphonaType, Documentum, Entity, Missa, MissaType,
    MissaTypeAntiphonaType, Suggestion,
};

/// Rows of one entity kind, keyed by id
///
/// Keys are handed out from a monotonically increasing counter and are never
/// reused after a delete, matching an AUTOINCREMENT column.
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Entity> Table<T> {
    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn put(&mut self, row: T) {
        let id = row.id();
        if id >= self.next_id {
            self.next_id = id + 1;
        }
        self.rows.insert(id, row);
    }

    fn remove(&mut self, id: i64) -> Option<T> {
        self.rows.remove(&id)
    }

    /// Look up a row by key
    pub fn get(&self, id: i64) -> Option<&T> {
        self.rows.get(&id)
    }

    /// Iterate rows in key order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Binds an entity type to its table inside the Store
pub trait Stored: Entity {
    fn table(store: &Store) -> &Table<Self>;
    fn table_mut(store: &mut Store) -> &mut Table<Self>;
}

macro_rules! stored {
    ($ty:ty, $field:ident) => {
        impl Stored for $ty {
            fn table(store: &Store) -> &Table<Self> {
                &store.$field
            }

            fn table_mut(store: &mut Store) -> &mut Table<Self> {
                &mut store.$field
            }
        }
    };
}

/// In-memory store for the catalog
///
/// One table per entity kind. Not thread-safe; designed for single-writer
/// use through `&mut Store`, which is also what makes the default-category
/// lookup-or-create race-free here. The SQLite repository provides the same
/// operations for shared databases.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub(crate) annos: Table<Anno>,
    pub(crate) antiphona_types: Table<AntiphonaType>,
    pub(crate) missa_types: Table<MissaType>,
    pub(crate) memberships: Table<MissaTypeAntiphonaType>,
    pub(crate) missae: Table<Missa>,
    pub(crate) antiphonae: Table<Antiphona>,
    pub(crate) documenta: Table<Documentum>,
    pub(crate) assignments: Table<AntiphonaMissa>,
    pub(crate) suggestions: Table<Suggestion>,
}

stored!(Anno, annos);
stored!(AntiphonaType, antiphona_types);
stored!(MissaType, missa_types);
stored!(MissaTypeAntiphonaType, memberships);
stored!(Missa, missae);
stored!(Antiphona, antiphonae);
stored!(Documentum, documenta);
stored!(AntiphonaMissa, assignments);
stored!(Suggestion, suggestions);

impl Store {
    /// Create a new empty Store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a row by key
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no row of this kind has the key.
    pub fn get<T: Stored>(&self, id: i64) -> Result<&T> {
        T::table(self).get(id).ok_or(CatalogError::NotFound {
            entity: T::NAME,
            id,
        })
    }

    /// Get a mutable reference to a row by key
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no row of this kind has the key.
    pub fn get_mut<T: Stored>(&mut self, id: i64) -> Result<&mut T> {
        T::table_mut(self)
            .rows
            .get_mut(&id)
            .ok_or(CatalogError::NotFound {
                entity: T::NAME,
                id,
            })
    }

    /// List all rows of a kind, ordered by key
    pub fn list<T: Stored>(&self) -> Vec<&T> {
        T::table(self).iter().collect()
    }

    /// Number of rows of a kind
    pub fn count<T: Stored>(&self) -> usize {
        T::table(self).len()
    }

    /// Check if a row exists
    pub fn contains<T: Stored>(&self, id: i64) -> bool {
        T::table(self).get(id).is_some()
    }

    /// Fail with `NotFound` unless the row exists
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no row of this kind has the key.
    pub fn require<T: Stored>(&self, id: i64) -> Result<()> {
        self.get::<T>(id).map(|_| ())
    }

    /// Insert a row keeping its key
    ///
    /// Used by hydration and test helpers. Bypasses validation and
    /// referential checks; the key counter advances past the inserted key.
    pub fn insert<T: Stored>(&mut self, row: T) {
        T::table_mut(self).put(row);
    }

    /// Reserve the next key of a kind
    pub(crate) fn next_id<T: Stored>(&mut self) -> i64 {
        T::table_mut(self).allocate_id()
    }

    /// Remove a row, returning it if it existed
    pub(crate) fn remove<T: Stored>(&mut self, id: i64) -> Option<T> {
        T::table_mut(self).remove(id)
    }

    /// Remove every row of a kind matching the predicate, returning their keys
    pub(crate) fn remove_where<T: Stored>(&mut self, pred: impl Fn(&T) -> bool) -> Vec<i64> {
        let doomed: Vec<i64> = T::table(self)
            .iter()
            .filter(|row| pred(row))
            .map(|row| row.id())
            .collect();
        for id in &doomed {
            self.remove::<T>(*id);
        }
        doomed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store() {
        let store = Store::new();
        assert_eq!(store.count::<Anno>(), 0);
        assert_eq!(store.count::<Missa>(), 0);
    }

    #[test]
    fn test_insert_and_get() {
        let mut store = Store::new();
        store.insert(Anno::new(7, "B".to_string()));

        let anno = store.get::<Anno>(7).unwrap();
        assert_eq!(anno.name, "B");
        assert!(store.contains::<Anno>(7));
    }

    #[test]
    fn test_get_missing_row() {
        let store = Store::new();
        let result = store.get::<Documentum>(1);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::NotFound {
                entity: "Documentum",
                id: 1
            }
        );
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut store = Store::new();
        let first = store.next_id::<Anno>();
        store.insert(Anno::new(first, "A".to_string()));
        store.remove::<Anno>(first);

        let second = store.next_id::<Anno>();
        assert!(second > first);
    }

    #[test]
    fn test_insert_advances_counter() {
        let mut store = Store::new();
        store.insert(Anno::new(10, "C".to_string()));
        assert_eq!(store.next_id::<Anno>(), 11);
    }
}
