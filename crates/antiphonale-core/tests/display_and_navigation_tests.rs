#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use antiphonale_core::model::EntityKind;
use antiphonale_core::ops::{assignment_ops, missa_ops};
use antiphonale_core::queries;
use antiphonale_core::render::{display_antiphona_missa, display_suggestion, display_text};
use antiphonale_core::{AntiphonaMissa, DominicaResolver, Suggestion};
use common::seeded_catalog;

#[test]
fn test_display_of_every_kind() {
    let c = seeded_catalog();
    let s = &c.store;

    assert_eq!(display_text(s, EntityKind::Anno, c.anno_a).unwrap(), "Anno A");
    assert_eq!(
        display_text(s, EntityKind::AntiphonaType, c.introito).unwrap(),
        "Antiphona ad Introito"
    );
    assert_eq!(display_text(s, EntityKind::MissaType, c.dominica).unwrap(), "Dominica");
    assert_eq!(
        display_text(s, EntityKind::Missa, c.missa).unwrap(),
        "Dominica I Adventus"
    );
    assert_eq!(
        display_text(s, EntityKind::Antiphona, c.antiphona).unwrap(),
        "Ad te levavi"
    );
    assert_eq!(
        display_text(s, EntityKind::Documentum, c.graduale).unwrap(),
        "Graduale Romanum"
    );
    assert_eq!(
        display_text(s, EntityKind::AntiphonaMissa, c.assignment).unwrap(),
        "Dominica I Adventus - Ad te levavi"
    );
    assert_eq!(
        display_text(s, EntityKind::Suggestion, c.suggestion).unwrap(),
        "Suggestion: Ad te levavi - Gregorian (Liber Usualis), for Dominica I Adventus - Ad te levavi"
    );
}

#[test]
fn test_display_helpers_match_display_text() {
    let c = seeded_catalog();
    let am = c.store.get::<AntiphonaMissa>(c.assignment).unwrap();
    let sg = c.store.get::<Suggestion>(c.suggestion).unwrap();

    assert_eq!(
        display_antiphona_missa(&c.store, am).unwrap(),
        display_text(&c.store, EntityKind::AntiphonaMissa, c.assignment).unwrap()
    );
    assert_eq!(
        display_suggestion(&c.store, sg).unwrap(),
        display_text(&c.store, EntityKind::Suggestion, c.suggestion).unwrap()
    );
}

#[test]
fn test_display_of_missing_row_is_not_found() {
    let c = seeded_catalog();
    assert!(display_text(&c.store, EntityKind::Missa, 77).is_err());
}

#[test]
fn test_navigation_between_missae_and_antiphonae() {
    // GIVEN the same Antiphona assigned twice to one Missa and once to another
    let mut c = seeded_catalog();
    let second_missa = missa_ops::create_missa(
        &mut c.store,
        "Dominica II Adventus".to_string(),
        None,
        &DominicaResolver,
    )
    .unwrap();
    let base = c.store.get::<AntiphonaMissa>(c.assignment).unwrap().clone();
    let mut draft = antiphonale_core::model::AntiphonaMissaDraft {
        antiphona_id: base.antiphona_id,
        missa_id: base.missa_id,
        anno_id: None,
        evangelium: Some("Quando legitur Evangelium de Lazaro".to_string()),
        antiphona_type_id: base.antiphona_type_id,
        documentum_id: base.documentum_id,
        psalm: String::new(),
        alt_psalm: String::new(),
    };
    assignment_ops::create_antiphona_missa(&mut c.store, draft.clone()).unwrap();
    draft.missa_id = second_missa;
    assignment_ops::create_antiphona_missa(&mut c.store, draft).unwrap();

    // WHEN navigating both ways
    let antiphonae = queries::antiphonae_of_missa(&c.store, c.missa).unwrap();
    let missae = queries::missae_of_antiphona(&c.store, c.antiphona).unwrap();

    // THEN each related row appears once
    assert_eq!(antiphonae.len(), 1);
    assert_eq!(missae.len(), 2);
    assert_eq!(
        queries::assignments_of_missa(&c.store, c.missa).unwrap().len(),
        2
    );
    assert_eq!(
        queries::missae_of_type(&c.store, c.dominica).unwrap().len(),
        2
    );
    assert_eq!(
        queries::suggestions_of(&c.store, c.assignment).unwrap().len(),
        1
    );
}
