//! Command boundary
//!
//! `apply()` is the single entry point for mutating a catalog held in
//! memory. It takes ownership of the current store and either returns the
//! next valid store or an error.
//!
//! ## Atomicity
//!
//! Commands run against the owned store and the result is re-checked with
//! `validate_store` before it is handed back. Callers that need the old
//! state after a failure keep a clone, as the tests below do.
//!
//! ## Example
//!
//! ```
//! use antiphonale_core::{apply, Command, DominicaResolver, Store};
//!
//! let state = Store::new();
//! let cmd = Command::MissaCreate {
//!     name: "Dominica I Adventus".to_string(),
//!     missa_type_id: None,
//! };
//!
//! let state = apply(state, cmd, &DominicaResolver).unwrap();
//! assert_eq!(state.list::<antiphonale_core::Missa>().len(), 1);
//! ```

use crate::commands::Command;
use crate::errors::Result;
use crate::model::EntityKind;
use crate::ops::{
    antiphona_ops, assignment_ops, missa_ops, missa_type_ops, reference_ops, suggestion_ops,
    Store,
};
use crate::policy::DefaultMissaTypeResolver;
use crate::rules::validate_store;

/// Apply a command to a store, returning the next store state
///
/// # Arguments
///
/// * `state` - Current store (ownership transferred)
/// * `cmd` - Command to execute
/// * `resolver` - Source of the default MissaType for Missa creation and
///   MissaType deletion
///
/// # Errors
///
/// Any error of the underlying operation, or a store-wide invariant
/// violation found after it ran.
pub fn apply(
    mut state: Store,
    cmd: Command,
    resolver: &dyn DefaultMissaTypeResolver,
) -> Result<Store> {
    match cmd {
        Command::AnnoCreate { name } => {
            reference_ops::create_anno(&mut state, name)?;
        }
        Command::AnnoUpdate { anno_id, name } => {
            reference_ops::update_anno(&mut state, anno_id, name)?;
        }
        Command::AntiphonaTypeCreate { name } => {
            reference_ops::create_antiphona_type(&mut state, name)?;
        }
        Command::AntiphonaTypeUpdate {
            antiphona_type_id,
            name,
        } => {
            reference_ops::update_antiphona_type(&mut state, antiphona_type_id, name)?;
        }
        Command::DocumentumCreate { name } => {
            reference_ops::create_documentum(&mut state, name)?;
        }
        Command::DocumentumUpdate {
            documentum_id,
            name,
        } => {
            reference_ops::update_documentum(&mut state, documentum_id, name)?;
        }
        Command::MissaTypeCreate { name } => {
            missa_type_ops::create_missa_type(&mut state, name)?;
        }
        Command::MissaTypeUpdate {
            missa_type_id,
            name,
        } => {
            missa_type_ops::update_missa_type(&mut state, missa_type_id, name)?;
        }
        Command::MissaTypeResolveDefault => {
            resolver.resolve(&mut state)?;
        }
        Command::MemberAdd {
            missa_type_id,
            antiphona_type_id,
            order,
        } => {
            missa_type_ops::add_member(&mut state, missa_type_id, antiphona_type_id, order)?;
        }
        Command::MemberReorder {
            membership_id,
            order,
        } => {
            missa_type_ops::update_member_order(&mut state, membership_id, order)?;
        }
        Command::MemberRemove { membership_id } => {
            missa_type_ops::remove_member(&mut state, membership_id)?;
        }
        Command::MissaCreate {
            name,
            missa_type_id,
        } => {
            missa_ops::create_missa(&mut state, name, missa_type_id, resolver)?;
        }
        Command::MissaUpdate {
            missa_id,
            name,
            missa_type_id,
        } => {
            missa_ops::update_missa(&mut state, missa_id, name, missa_type_id)?;
        }
        Command::AntiphonaCreate { name, text } => {
            antiphona_ops::create_antiphona(&mut state, name, text)?;
        }
        Command::AntiphonaUpdate {
            antiphona_id,
            name,
            text,
        } => {
            antiphona_ops::update_antiphona(&mut state, antiphona_id, name, text)?;
        }
        Command::AntiphonaMissaCreate(draft) => {
            assignment_ops::create_antiphona_missa(&mut state, draft)?;
        }
        Command::AntiphonaMissaUpdate {
            antiphona_missa_id,
            draft,
        } => {
            assignment_ops::update_antiphona_missa(&mut state, antiphona_missa_id, draft)?;
        }
        Command::SuggestionCreate(draft) => {
            suggestion_ops::create_suggestion(&mut state, draft)?;
        }
        Command::SuggestionUpdate {
            suggestion_id,
            draft,
        } => {
            suggestion_ops::update_suggestion(&mut state, suggestion_id, draft)?;
        }
        Command::Delete { kind, id } => {
            delete(&mut state, kind, id, resolver)?;
        }
    }

    validate_store(&state)?;
    Ok(state)
}

/// Delete a row of any kind with that kind's deletion semantics
///
/// # Errors
/// * `NotFound` - no such row
/// * `Protected` - an Anno, AntiphonaType or Documentum still has assignments
pub fn delete(
    store: &mut Store,
    kind: EntityKind,
    id: i64,
    resolver: &dyn DefaultMissaTypeResolver,
) -> Result<()> {
    match kind {
        EntityKind::Anno => reference_ops::delete_anno(store, id),
        EntityKind::AntiphonaType => reference_ops::delete_antiphona_type(store, id),
        EntityKind::Documentum => reference_ops::delete_documentum(store, id),
        EntityKind::MissaType => missa_type_ops::delete_missa_type(store, id, resolver),
        EntityKind::MissaTypeAntiphonaType => missa_type_ops::remove_member(store, id),
        EntityKind::Missa => missa_ops::delete_missa(store, id),
        EntityKind::Antiphona => antiphona_ops::delete_antiphona(store, id),
        EntityKind::AntiphonaMissa => assignment_ops::delete_antiphona_missa(store, id),
        EntityKind::Suggestion => suggestion_ops::delete_suggestion(store, id),
    }
}
