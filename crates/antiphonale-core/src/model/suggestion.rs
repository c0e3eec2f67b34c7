use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Entity, EntityKind};

/// Suggestion - a proposed musical setting for an AntiphonaMissa
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: i64,
    pub song_name: String,
    pub author: String,
    pub audio_link: String,
    pub sheet_link: String,

    /// How close the setting is to the chant, fixed point NN.NN
    pub similarity: Decimal,

    pub antiphona_missa_id: i64,
}

impl Suggestion {
    pub fn from_draft(id: i64, draft: SuggestionDraft) -> Self {
        Self {
            id,
            song_name: draft.song_name,
            author: draft.author,
            audio_link: draft.audio_link,
            sheet_link: draft.sheet_link,
            similarity: draft.similarity,
            antiphona_missa_id: draft.antiphona_missa_id,
        }
    }
}

impl Entity for Suggestion {
    const NAME: &'static str = "Suggestion";
    const KIND: EntityKind = EntityKind::Suggestion;

    fn id(&self) -> i64 {
        self.id
    }
}

/// Field values for creating or replacing a Suggestion
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SuggestionDraft {
    pub song_name: String,
    pub author: String,
    pub audio_link: String,
    pub sheet_link: String,
    pub similarity: Decimal,
    pub antiphona_missa_id: i64,
}
