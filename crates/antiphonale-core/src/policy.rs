//! Default MissaType resolution
//!
//! A Missa must always point at a MissaType. When a Missa is created without
//! one, or when its MissaType is deleted, the operation asks an injected
//! `DefaultMissaTypeResolver` for the fallback row instead of computing it
//! itself.

use crate::errors::Result;
use crate::ops::{missa_type_ops, Store};

/// Supplies the MissaType a Missa falls back to
pub trait DefaultMissaTypeResolver {
    /// Return the key of the fallback MissaType, creating it if needed
    ///
    /// Must be idempotent: repeated calls on the same store return the same key.
    ///
    /// # Errors
    ///
    /// Implementation-specific; the standard resolver only fails on
    /// validation of its own name.
    fn resolve(&self, store: &mut Store) -> Result<i64>;
}

/// Resolver that looks up or creates the MissaType named "Dominica"
///
/// # Example
/// ```
/// use antiphonale_core::policy::{DefaultMissaTypeResolver, DominicaResolver};
/// use antiphonale_core::Store;
///
/// let mut store = Store::new();
/// let first = DominicaResolver.resolve(&mut store).unwrap();
/// let second = DominicaResolver.resolve(&mut store).unwrap();
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DominicaResolver;

impl DefaultMissaTypeResolver for DominicaResolver {
    fn resolve(&self, store: &mut Store) -> Result<i64> {
        missa_type_ops::resolve_default_missa_type(store)
    }
}

/// Resolver that always answers with a fixed, pre-existing MissaType
///
/// Useful when a deployment seeds its fallback row under a different name,
/// and in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedMissaTypeResolver {
    missa_type_id: i64,
}

impl FixedMissaTypeResolver {
    pub fn new(missa_type_id: i64) -> Self {
        Self { missa_type_id }
    }
}

impl DefaultMissaTypeResolver for FixedMissaTypeResolver {
    fn resolve(&self, store: &mut Store) -> Result<i64> {
        store.require::<crate::model::MissaType>(self.missa_type_id)?;
        Ok(self.missa_type_id)
    }
}
