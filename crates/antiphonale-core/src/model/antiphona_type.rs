use serde::{Deserialize, Serialize};

use super::{Entity, EntityKind};

/// AntiphonaType - the liturgical slot a chant fills
///
/// Introito, Offertorium, Communio, plus special slots for extraordinary
/// rites (e.g. ad Liturgiam Baptismalem in the Easter Vigil).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AntiphonaType {
    pub id: i64,
    pub name: String,
}

impl AntiphonaType {
    pub fn new(id: i64, name: String) -> Self {
        Self { id, name }
    }
}

impl Entity for AntiphonaType {
    const NAME: &'static str = "AntiphonaType";
    const KIND: EntityKind = EntityKind::AntiphonaType;

    fn id(&self) -> i64 {
        self.id
    }
}

impl std::fmt::Display for AntiphonaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Antiphona ad {}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let t = AntiphonaType::new(1, "Introito".to_string());
        assert_eq!(t.to_string(), "Antiphona ad Introito");
    }
}
