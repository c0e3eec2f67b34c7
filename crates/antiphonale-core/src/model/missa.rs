use serde::{Deserialize, Serialize};

use super::{Entity, EntityKind};

/// Missa - a named Mass occasion (e.g. "Dominica I Adventus")
///
/// Always references exactly one MissaType. When that MissaType is deleted
/// the reference is rewritten to the default MissaType.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Missa {
    pub id: i64,
    pub name: String,
    pub missa_type_id: i64,
}

impl Missa {
    pub fn new(id: i64, name: String, missa_type_id: i64) -> Self {
        Self {
            id,
            name,
            missa_type_id,
        }
    }
}

impl Entity for Missa {
    const NAME: &'static str = "Missa";
    const KIND: EntityKind = EntityKind::Missa;

    fn id(&self) -> i64 {
        self.id
    }
}

impl std::fmt::Display for Missa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
