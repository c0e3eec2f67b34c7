//! Command inventory for catalog mutations
//!
//! Every write the catalog supports has a variant here. Commands are
//! executed through `apply()`.

use crate::model::{AntiphonaMissaDraft, EntityKind, SuggestionDraft};

/// A single catalog mutation
///
/// Commands are processed by the `apply()` function, which takes ownership of
/// the current store, executes the command and returns the new store.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AnnoCreate {
        name: String,
    },
    AnnoUpdate {
        anno_id: i64,
        name: String,
    },

    AntiphonaTypeCreate {
        name: String,
    },
    AntiphonaTypeUpdate {
        antiphona_type_id: i64,
        name: String,
    },

    DocumentumCreate {
        name: String,
    },
    DocumentumUpdate {
        documentum_id: i64,
        name: String,
    },

    MissaTypeCreate {
        name: String,
    },
    MissaTypeUpdate {
        missa_type_id: i64,
        name: String,
    },

    /// Look up or create the default MissaType
    MissaTypeResolveDefault,

    /// Attach an AntiphonaType to a MissaType at `order`
    MemberAdd {
        missa_type_id: i64,
        antiphona_type_id: i64,
        order: u16,
    },
    MemberReorder {
        membership_id: i64,
        order: u16,
    },
    MemberRemove {
        membership_id: i64,
    },

    /// Create a Missa; `missa_type_id: None` files it under the default type
    MissaCreate {
        name: String,
        missa_type_id: Option<i64>,
    },
    MissaUpdate {
        missa_id: i64,
        name: Option<String>,
        missa_type_id: Option<i64>,
    },

    AntiphonaCreate {
        name: String,
        text: String,
    },
    AntiphonaUpdate {
        antiphona_id: i64,
        name: Option<String>,
        text: Option<String>,
    },

    AntiphonaMissaCreate(AntiphonaMissaDraft),
    AntiphonaMissaUpdate {
        antiphona_missa_id: i64,
        draft: AntiphonaMissaDraft,
    },

    SuggestionCreate(SuggestionDraft),
    SuggestionUpdate {
        suggestion_id: i64,
        draft: SuggestionDraft,
    },

    /// Delete any row, with the deletion semantics of its kind
    Delete {
        kind: EntityKind,
        id: i64,
    },
}

impl Command {
    /// Operation name used in boundary logs
    pub fn op_name(&self) -> &'static str {
        match self {
            Command::AnnoCreate { .. } => "anno_create",
            Command::AnnoUpdate { .. } => "anno_update",
            Command::AntiphonaTypeCreate { .. } => "antiphona_type_create",
            Command::AntiphonaTypeUpdate { .. } => "antiphona_type_update",
            Command::DocumentumCreate { .. } => "documentum_create",
            Command::DocumentumUpdate { .. } => "documentum_update",
            Command::MissaTypeCreate { .. } => "missa_type_create",
            Command::MissaTypeUpdate { .. } => "missa_type_update",
            Command::MissaTypeResolveDefault => "missa_type_resolve_default",
            Command::MemberAdd { .. } => "member_add",
            Command::MemberReorder { .. } => "member_reorder",
            Command::MemberRemove { .. } => "member_remove",
            Command::MissaCreate { .. } => "missa_create",
            Command::MissaUpdate { .. } => "missa_update",
            Command::AntiphonaCreate { .. } => "antiphona_create",
            Command::AntiphonaUpdate { .. } => "antiphona_update",
            Command::AntiphonaMissaCreate(_) => "antiphona_missa_create",
            Command::AntiphonaMissaUpdate { .. } => "antiphona_missa_update",
            Command::SuggestionCreate(_) => "suggestion_create",
            Command::SuggestionUpdate { .. } => "suggestion_update",
            Command::Delete { .. } => "delete",
        }
    }
}
