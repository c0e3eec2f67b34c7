pub mod anno;
pub mod antiphona;
pub mod antiphona_missa;
pub mod antiphona_type;
pub mod documentum;
pub mod missa;
pub mod missa_type;
pub mod suggestion;

pub use anno::Anno;
pub use antiphona::Antiphona;
pub use antiphona_missa::{AntiphonaMissa, AntiphonaMissaDraft};
pub use antiphona_type::AntiphonaType;
pub use documentum::Documentum;
pub use missa::Missa;
pub use missa_type::{MissaType, MissaTypeAntiphonaType, DEFAULT_MISSA_TYPE_NAME};
pub use suggestion::{Suggestion, SuggestionDraft};

use serde::{Deserialize, Serialize};

/// A persisted catalog row with an auto-assigned integer key
pub trait Entity: Clone + std::fmt::Debug {
    /// Entity name used in errors, logs and the admin registry
    const NAME: &'static str;

    /// Which kind of entity this is
    const KIND: EntityKind;

    /// The row key
    fn id(&self) -> i64;
}

/// The nine entity kinds of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Anno,
    AntiphonaType,
    MissaType,
    MissaTypeAntiphonaType,
    Missa,
    Antiphona,
    Documentum,
    AntiphonaMissa,
    Suggestion,
}

impl EntityKind {
    /// All kinds, in registration order
    pub const ALL: [EntityKind; 9] = [
        EntityKind::Anno,
        EntityKind::Antiphona,
        EntityKind::AntiphonaMissa,
        EntityKind::AntiphonaType,
        EntityKind::Documentum,
        EntityKind::Missa,
        EntityKind::MissaType,
        EntityKind::MissaTypeAntiphonaType,
        EntityKind::Suggestion,
    ];

    /// Entity name as used in errors and the admin registry
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Anno => Anno::NAME,
            EntityKind::AntiphonaType => AntiphonaType::NAME,
            EntityKind::MissaType => MissaType::NAME,
            EntityKind::MissaTypeAntiphonaType => MissaTypeAntiphonaType::NAME,
            EntityKind::Missa => Missa::NAME,
            EntityKind::Antiphona => Antiphona::NAME,
            EntityKind::Documentum => Documentum::NAME,
            EntityKind::AntiphonaMissa => AntiphonaMissa::NAME,
            EntityKind::Suggestion => Suggestion::NAME,
        }
    }

    /// SQL table backing this kind
    pub fn table(&self) -> &'static str {
        match self {
            EntityKind::Anno => "annos",
            EntityKind::AntiphonaType => "antiphona_types",
            EntityKind::MissaType => "missa_types",
            EntityKind::MissaTypeAntiphonaType => "missa_type_antiphona_types",
            EntityKind::Missa => "missae",
            EntityKind::Antiphona => "antiphonae",
            EntityKind::Documentum => "documenta",
            EntityKind::AntiphonaMissa => "antiphona_missae",
            EntityKind::Suggestion => "suggestions",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for EntityKind {
    type Err = String;

    /// Accepts the entity name in any case, snake_case, or the table name
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.replace('_', "").to_ascii_lowercase();
        EntityKind::ALL
            .into_iter()
            .find(|kind| {
                kind.name().to_ascii_lowercase() == wanted
                    || kind.table().replace('_', "") == wanted
            })
            .ok_or_else(|| format!("unknown entity kind: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_from_str() {
        assert_eq!("missa".parse::<EntityKind>(), Ok(EntityKind::Missa));
        assert_eq!("missae".parse::<EntityKind>(), Ok(EntityKind::Missa));
        assert_eq!(
            "antiphona_missa".parse::<EntityKind>(),
            Ok(EntityKind::AntiphonaMissa)
        );
        assert_eq!(
            "MissaTypeAntiphonaType".parse::<EntityKind>(),
            Ok(EntityKind::MissaTypeAntiphonaType)
        );
        assert!("hymnus".parse::<EntityKind>().is_err());
    }

    #[test]
    fn test_all_kinds_have_distinct_tables() {
        let mut tables: Vec<_> = EntityKind::ALL.iter().map(|k| k.table()).collect();
        tables.sort();
        tables.dedup();
        assert_eq!(tables.len(), 9);
    }
}
