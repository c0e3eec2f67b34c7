use serde::{Deserialize, Serialize};

use super::{Entity, EntityKind};

/// Antiphona - the chant text itself, in Latin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Antiphona {
    pub id: i64,

    /// Incipit or short title, at most 120 characters
    pub name: String,

    /// Full Latin text, at most 300 characters
    pub text: String,
}

impl Antiphona {
    pub fn new(id: i64, name: String, text: String) -> Self {
        Self { id, name, text }
    }
}

impl Entity for Antiphona {
    const NAME: &'static str = "Antiphona";
    const KIND: EntityKind = EntityKind::Antiphona;

    fn id(&self) -> i64 {
        self.id
    }
}

impl std::fmt::Display for Antiphona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
