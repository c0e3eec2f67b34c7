//! Seed format v0
//!
//! Reference data only: names of Annos, AntiphonaTypes and Documenta, plus
//! MissaTypes with their member AntiphonaTypes listed in order. Rows are
//! identified by name so the same seed can be imported repeatedly.

use serde::{Deserialize, Serialize};

/// Top-level seed file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedV0 {
    /// Must be 0 for this format
    pub schema_version: u32,

    #[serde(default)]
    pub annos: Vec<String>,

    #[serde(default)]
    pub antiphona_types: Vec<String>,

    #[serde(default)]
    pub documenta: Vec<String>,

    #[serde(default)]
    pub missa_types: Vec<SeedMissaType>,
}

/// A MissaType and its ordered member AntiphonaType names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedMissaType {
    pub name: String,

    /// Membership order is the position in this list, starting at 1
    #[serde(default)]
    pub antiphona_types: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_seed() {
        let yaml = r#"
schema_version: 0
annos: [A]
"#;
        let seed: SeedV0 = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(seed.schema_version, 0);
        assert_eq!(seed.annos, vec!["A"]);
        assert!(seed.missa_types.is_empty());
    }

    #[test]
    fn test_missa_type_members_keep_order() {
        let yaml = r#"
schema_version: 0
antiphona_types: [Introito, Communio]
missa_types:
  - name: Feria
    antiphona_types: [Communio, Introito]
"#;
        let seed: SeedV0 = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            seed.missa_types[0].antiphona_types,
            vec!["Communio", "Introito"]
        );
    }
}
