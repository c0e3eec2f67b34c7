use serde::{Deserialize, Serialize};

use super::{Entity, EntityKind};

/// AntiphonaMissa - an Antiphona placed in a Missa
///
/// This is the central junction of the catalog. Besides the pairing it
/// records the context the Graduale gives for it:
/// * `anno_id` and `evangelium` qualify rubrics such as "Anno A" or
///   "Quando legitur Evangelium de ...".
/// * `antiphona_type_id` is the slot (Introito, Offertorium, Communio, ...).
/// * `documentum_id` is the book the assignment comes from.
/// * `psalm` / `alt_psalm` hold the verse citations.
///
/// Several assignments may share the same Antiphona and Missa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AntiphonaMissa {
    pub id: i64,
    pub antiphona_id: i64,
    pub missa_id: i64,
    pub anno_id: Option<i64>,
    pub evangelium: Option<String>,
    pub antiphona_type_id: i64,
    pub documentum_id: i64,
    pub psalm: String,
    pub alt_psalm: String,
}

impl AntiphonaMissa {
    pub fn from_draft(id: i64, draft: AntiphonaMissaDraft) -> Self {
        Self {
            id,
            antiphona_id: draft.antiphona_id,
            missa_id: draft.missa_id,
            anno_id: draft.anno_id,
            evangelium: draft.evangelium,
            antiphona_type_id: draft.antiphona_type_id,
            documentum_id: draft.documentum_id,
            psalm: draft.psalm,
            alt_psalm: draft.alt_psalm,
        }
    }
}

impl Entity for AntiphonaMissa {
    const NAME: &'static str = "AntiphonaMissa";
    const KIND: EntityKind = EntityKind::AntiphonaMissa;

    fn id(&self) -> i64 {
        self.id
    }
}

/// Field values for creating or replacing an AntiphonaMissa
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AntiphonaMissaDraft {
    pub antiphona_id: i64,
    pub missa_id: i64,
    pub anno_id: Option<i64>,
    pub evangelium: Option<String>,
    pub antiphona_type_id: i64,
    pub documentum_id: i64,
    pub psalm: String,
    pub alt_psalm: String,
}
