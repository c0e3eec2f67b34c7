use serde::{Deserialize, Serialize};

use super::{Entity, EntityKind};

/// Anno - a liturgical-year cycle
///
/// Sundays rotate through A, B and C; weekdays through I and II.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anno {
    pub id: i64,

    /// Cycle code, at most two characters
    pub name: String,
}

impl Anno {
    pub fn new(id: i64, name: String) -> Self {
        Self { id, name }
    }
}

impl Entity for Anno {
    const NAME: &'static str = "Anno";
    const KIND: EntityKind = EntityKind::Anno;

    fn id(&self) -> i64 {
        self.id
    }
}

impl std::fmt::Display for Anno {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Anno {}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let anno = Anno::new(1, "A".to_string());
        assert_eq!(anno.to_string(), "Anno A");
    }
}
