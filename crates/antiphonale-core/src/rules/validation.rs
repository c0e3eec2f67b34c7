//! Field validation for catalog rows
//!
//! Lengths are counted in characters, not bytes, so accented Latin
//! (e.g. "Lætare") is measured the way a character column measures it.

use rust_decimal::Decimal;
use url::Url;

use crate::errors::{CatalogError, Result};
use crate::model::{AntiphonaMissaDraft, SuggestionDraft};

pub const ANNO_NAME_MAX: usize = 2;
pub const ANTIPHONA_TYPE_NAME_MAX: usize = 40;
pub const MISSA_TYPE_NAME_MAX: usize = 40;
pub const MISSA_NAME_MAX: usize = 40;
pub const ANTIPHONA_NAME_MAX: usize = 120;
pub const ANTIPHONA_TEXT_MAX: usize = 300;
pub const DOCUMENTUM_NAME_MAX: usize = 20;
pub const EVANGELIUM_MAX: usize = 80;
pub const PSALM_MAX: usize = 80;
pub const SONG_NAME_MAX: usize = 40;
pub const AUTHOR_MAX: usize = 40;
pub const LINK_MAX: usize = 120;

/// Largest membership order (positive small integer)
pub const ORDER_MAX: u16 = 32767;

/// Similarity is stored with 4 digits, 2 of them decimal
pub const SIMILARITY_MAX_DIGITS: u32 = 4;
pub const SIMILARITY_DECIMAL_PLACES: u32 = 2;

/// Check an optional-content string against its max length
///
/// # Errors
/// `FieldTooLong` if `value` has more than `max` characters.
pub fn check_len(entity: &'static str, field: &'static str, value: &str, max: usize) -> Result<()> {
    let actual = value.chars().count();
    if actual > max {
        return Err(CatalogError::FieldTooLong {
            entity,
            field,
            max,
            actual,
        });
    }
    Ok(())
}

/// Check a required string: non-empty and within its max length
///
/// # Errors
/// `FieldRequired` if empty, `FieldTooLong` if oversized.
pub fn check_required(
    entity: &'static str,
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<()> {
    if value.is_empty() {
        return Err(CatalogError::FieldRequired { entity, field });
    }
    check_len(entity, field, value, max)
}

/// Check a link field: blank, or an absolute http(s) URL within the max length
///
/// # Errors
/// `FieldTooLong` or `InvalidUrl`.
pub fn check_url(entity: &'static str, field: &'static str, value: &str, max: usize) -> Result<()> {
    if value.is_empty() {
        return Ok(());
    }
    check_len(entity, field, value, max)?;

    let parsed = Url::parse(value).map_err(|e| CatalogError::InvalidUrl {
        entity,
        field,
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(CatalogError::InvalidUrl {
                entity,
                field,
                reason: format!("unsupported scheme '{}'", other),
            })
        }
    }
    if parsed.host_str().is_none() {
        return Err(CatalogError::InvalidUrl {
            entity,
            field,
            reason: "missing host".to_string(),
        });
    }
    Ok(())
}

/// Check that a similarity fits the fixed-point column (NN.NN)
///
/// Trailing zeros do not count as decimal places: `1.500` is accepted.
///
/// # Errors
/// `InvalidSimilarity` if the value needs more than 2 decimal places or more
/// than 2 integer digits.
pub fn check_similarity(value: Decimal) -> Result<()> {
    let normalized = value.normalize();
    let integer_digits = SIMILARITY_MAX_DIGITS - SIMILARITY_DECIMAL_PLACES;
    let limit = Decimal::from(10u32.pow(integer_digits));

    if normalized.scale() > SIMILARITY_DECIMAL_PLACES || normalized.abs() >= limit {
        return Err(CatalogError::InvalidSimilarity {
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Check a membership order is a positive small integer
///
/// # Errors
/// `InvalidOrder` for 0 or anything above `ORDER_MAX`.
pub fn check_order(order: u16) -> Result<()> {
    if order == 0 || order > ORDER_MAX {
        return Err(CatalogError::InvalidOrder {
            order,
            max: ORDER_MAX,
        });
    }
    Ok(())
}

pub fn validate_anno_name(name: &str) -> Result<()> {
    check_required("Anno", "name", name, ANNO_NAME_MAX)
}

pub fn validate_antiphona_type_name(name: &str) -> Result<()> {
    check_required("AntiphonaType", "name", name, ANTIPHONA_TYPE_NAME_MAX)
}

pub fn validate_missa_type_name(name: &str) -> Result<()> {
    check_required("MissaType", "name", name, MISSA_TYPE_NAME_MAX)
}

pub fn validate_documentum_name(name: &str) -> Result<()> {
    check_required("Documentum", "name", name, DOCUMENTUM_NAME_MAX)
}

pub fn validate_missa_name(name: &str) -> Result<()> {
    check_required("Missa", "name", name, MISSA_NAME_MAX)
}

pub fn validate_antiphona(name: &str, text: &str) -> Result<()> {
    check_required("Antiphona", "name", name, ANTIPHONA_NAME_MAX)?;
    check_required("Antiphona", "text", text, ANTIPHONA_TEXT_MAX)
}

/// Validate the scalar fields of an AntiphonaMissa (foreign keys are
/// checked against the store by the caller)
///
/// `psalm` must be present but may be empty.
pub fn validate_antiphona_missa(draft: &AntiphonaMissaDraft) -> Result<()> {
    if let Some(ref evangelium) = draft.evangelium {
        check_len("AntiphonaMissa", "evangelium", evangelium, EVANGELIUM_MAX)?;
    }
    check_len("AntiphonaMissa", "psalm", &draft.psalm, PSALM_MAX)?;
    check_len("AntiphonaMissa", "alt_psalm", &draft.alt_psalm, PSALM_MAX)
}

/// Validate the scalar fields of a Suggestion
pub fn validate_suggestion(draft: &SuggestionDraft) -> Result<()> {
    check_required("Suggestion", "song_name", &draft.song_name, SONG_NAME_MAX)?;
    check_len("Suggestion", "author", &draft.author, AUTHOR_MAX)?;
    check_url("Suggestion", "audio_link", &draft.audio_link, LINK_MAX)?;
    check_url("Suggestion", "sheet_link", &draft.sheet_link, LINK_MAX)?;
    check_similarity(draft.similarity)
}
