//! Admin schema registry
//!
//! Describes every catalog entity the way a generic admin console needs to
//! see it: scalar fields with their constraints, and foreign keys with their
//! deletion behaviour. The registry carries no view logic.

use serde::Serialize;

use crate::model::EntityKind;
use crate::rules::validation::{
    ANNO_NAME_MAX, ANTIPHONA_NAME_MAX, ANTIPHONA_TEXT_MAX, ANTIPHONA_TYPE_NAME_MAX, AUTHOR_MAX,
    DOCUMENTUM_NAME_MAX, EVANGELIUM_MAX, LINK_MAX, MISSA_NAME_MAX, MISSA_TYPE_NAME_MAX, PSALM_MAX,
    SIMILARITY_DECIMAL_PLACES, SIMILARITY_MAX_DIGITS, SONG_NAME_MAX,
};

/// Storage kind of a scalar field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum FieldKind {
    Text,
    Url,
    SmallInteger,
    Decimal { max_digits: u32, decimal_places: u32 },
}

/// What happens to a referencing row when its target is deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OnDelete {
    /// The referencing row is deleted too
    Cascade,
    /// The deletion is refused while references exist
    Protect,
    /// The reference is rewritten to the default row
    SetDefault,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSchema {
    pub name: &'static str,
    pub kind: FieldKind,
    pub max_length: Option<usize>,
    pub nullable: bool,
    pub blank: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForeignKeySchema {
    pub name: &'static str,
    pub target: EntityKind,
    pub on_delete: OnDelete,
    pub nullable: bool,
}

/// One registered entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitySchema {
    pub entity: EntityKind,
    pub table: &'static str,
    pub fields: Vec<FieldSchema>,
    pub foreign_keys: Vec<ForeignKeySchema>,
}

impl EntitySchema {
    fn new(entity: EntityKind) -> Self {
        Self {
            entity,
            table: entity.table(),
            fields: Vec::new(),
            foreign_keys: Vec::new(),
        }
    }

    fn required_text(mut self, name: &'static str, max: usize) -> Self {
        self.fields.push(FieldSchema {
            name,
            kind: FieldKind::Text,
            max_length: Some(max),
            nullable: false,
            blank: false,
        });
        self
    }

    fn optional_field(mut self, name: &'static str, kind: FieldKind, max: usize, nullable: bool) -> Self {
        self.fields.push(FieldSchema {
            name,
            kind,
            max_length: Some(max),
            nullable,
            blank: true,
        });
        self
    }

    fn field(mut self, name: &'static str, kind: FieldKind) -> Self {
        self.fields.push(FieldSchema {
            name,
            kind,
            max_length: None,
            nullable: false,
            blank: false,
        });
        self
    }

    fn fk(mut self, name: &'static str, target: EntityKind, on_delete: OnDelete) -> Self {
        self.foreign_keys.push(ForeignKeySchema {
            name,
            target,
            on_delete,
            nullable: false,
        });
        self
    }

    fn nullable_fk(mut self, name: &'static str, target: EntityKind, on_delete: OnDelete) -> Self {
        self.foreign_keys.push(ForeignKeySchema {
            name,
            target,
            on_delete,
            nullable: true,
        });
        self
    }

    /// Look up a field by name
    pub fn field_named(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Look up a foreign key by name
    pub fn foreign_key_named(&self, name: &str) -> Option<&ForeignKeySchema> {
        self.foreign_keys.iter().find(|f| f.name == name)
    }
}

/// Schema of every registered entity, in registration order
pub fn registry() -> Vec<EntitySchema> {
    EntityKind::ALL.into_iter().map(schema_of).collect()
}

/// Schema of a single entity
pub fn schema_of(kind: EntityKind) -> EntitySchema {
    let schema = EntitySchema::new(kind);
    match kind {
        EntityKind::Anno => schema.required_text("name", ANNO_NAME_MAX),
        EntityKind::AntiphonaType => schema.required_text("name", ANTIPHONA_TYPE_NAME_MAX),
        EntityKind::MissaType => schema.required_text("name", MISSA_TYPE_NAME_MAX),
        EntityKind::MissaTypeAntiphonaType => schema
            .field("order", FieldKind::SmallInteger)
            .fk("missa_type", EntityKind::MissaType, OnDelete::Cascade)
            .fk("antiphona_type", EntityKind::AntiphonaType, OnDelete::Cascade),
        EntityKind::Missa => schema
            .required_text("name", MISSA_NAME_MAX)
            .fk("missa_type", EntityKind::MissaType, OnDelete::SetDefault),
        EntityKind::Antiphona => schema
            .required_text("name", ANTIPHONA_NAME_MAX)
            .required_text("text", ANTIPHONA_TEXT_MAX),
        EntityKind::Documentum => schema.required_text("name", DOCUMENTUM_NAME_MAX),
        EntityKind::AntiphonaMissa => schema
            .optional_field("evangelium", FieldKind::Text, EVANGELIUM_MAX, true)
            .optional_field("psalm", FieldKind::Text, PSALM_MAX, false)
            .optional_field("alt_psalm", FieldKind::Text, PSALM_MAX, false)
            .fk("antiphona", EntityKind::Antiphona, OnDelete::Cascade)
            .fk("missa", EntityKind::Missa, OnDelete::Cascade)
            .nullable_fk("anno", EntityKind::Anno, OnDelete::Protect)
            .fk("antiphona_type", EntityKind::AntiphonaType, OnDelete::Protect)
            .fk("documentum", EntityKind::Documentum, OnDelete::Protect),
        EntityKind::Suggestion => schema
            .required_text("song_name", SONG_NAME_MAX)
            .optional_field("author", FieldKind::Text, AUTHOR_MAX, false)
            .optional_field("audio_link", FieldKind::Url, LINK_MAX, false)
            .optional_field("sheet_link", FieldKind::Url, LINK_MAX, false)
            .field(
                "similarity",
                FieldKind::Decimal {
                    max_digits: SIMILARITY_MAX_DIGITS,
                    decimal_places: SIMILARITY_DECIMAL_PLACES,
                },
            )
            .fk("antiphona_missa", EntityKind::AntiphonaMissa, OnDelete::Cascade),
    }
}
