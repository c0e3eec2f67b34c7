use serde::{Deserialize, Serialize};

use super::{Entity, EntityKind};

/// Name of the well-known MissaType every orphaned Missa falls back to
pub const DEFAULT_MISSA_TYPE_NAME: &str = "Dominica";

/// MissaType - a class of Mass (Dominica, Feria, ...)
///
/// Besides classifying Missae, a MissaType decides which antiphona slots a
/// celebration has and in what order, through its `MissaTypeAntiphonaType`
/// memberships. Custom types such as the Easter Vigil carry slots the
/// ordinary types lack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissaType {
    pub id: i64,
    pub name: String,
}

impl MissaType {
    pub fn new(id: i64, name: String) -> Self {
        Self { id, name }
    }

    /// Check if this is the default row
    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_MISSA_TYPE_NAME
    }
}

impl Entity for MissaType {
    const NAME: &'static str = "MissaType";
    const KIND: EntityKind = EntityKind::MissaType;

    fn id(&self) -> i64 {
        self.id
    }
}

impl std::fmt::Display for MissaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Junction between a MissaType and one of its AntiphonaTypes
///
/// `order` positions the antiphona type within the MissaType's listing.
/// Orders are unique per MissaType.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissaTypeAntiphonaType {
    pub id: i64,
    pub missa_type_id: i64,
    pub antiphona_type_id: i64,
    pub order: u16,
}

impl MissaTypeAntiphonaType {
    pub fn new(id: i64, missa_type_id: i64, antiphona_type_id: i64, order: u16) -> Self {
        Self {
            id,
            missa_type_id,
            antiphona_type_id,
            order,
        }
    }
}

impl Entity for MissaTypeAntiphonaType {
    const NAME: &'static str = "MissaTypeAntiphonaType";
    const KIND: EntityKind = EntityKind::MissaTypeAntiphonaType;

    fn id(&self) -> i64 {
        self.id
    }
}
