use serde::{Deserialize, Serialize};

use super::{Entity, EntityKind};

/// Documentum - the liturgical book an assignment is drawn from
/// (Missale Romanum, Graduale Romanum, Graduale Simplex)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Documentum {
    pub id: i64,
    pub name: String,
}

impl Documentum {
    pub fn new(id: i64, name: String) -> Self {
        Self { id, name }
    }
}

impl Entity for Documentum {
    const NAME: &'static str = "Documentum";
    const KIND: EntityKind = EntityKind::Documentum;

    fn id(&self) -> i64 {
        self.id
    }
}

impl std::fmt::Display for Documentum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
