#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Cascade, protect and set-default behaviour of every delete

mod common;

use antiphonale_core::errors::{CatalogError, ExError, ExErrorKind};
use antiphonale_core::model::{
    AntiphonaMissa, AntiphonaType, Documentum, Missa, MissaType, MissaTypeAntiphonaType,
    Suggestion,
};
use antiphonale_core::ops::{
    antiphona_ops, assignment_ops, missa_ops, missa_type_ops, reference_ops,
};
use antiphonale_core::policy::FixedMissaTypeResolver;
use antiphonale_core::queries;
use antiphonale_core::DominicaResolver;
use common::seeded_catalog;

#[test]
fn test_delete_missa_cascades_to_assignments_and_suggestions() {
    // GIVEN a Missa with one assignment carrying one suggestion
    let mut c = seeded_catalog();

    // WHEN the Missa is deleted
    missa_ops::delete_missa(&mut c.store, c.missa).unwrap();

    // THEN the assignment and its suggestion are gone
    assert_eq!(c.store.count::<AntiphonaMissa>(), 0);
    assert_eq!(c.store.count::<Suggestion>(), 0);

    // AND the Antiphona itself survives
    assert!(antiphona_ops::read_antiphona(&c.store, c.antiphona).is_ok());
}

#[test]
fn test_delete_antiphona_cascades_to_assignments() {
    let mut c = seeded_catalog();

    antiphona_ops::delete_antiphona(&mut c.store, c.antiphona).unwrap();

    assert_eq!(c.store.count::<AntiphonaMissa>(), 0);
    assert_eq!(c.store.count::<Suggestion>(), 0);
    assert!(missa_ops::read_missa(&c.store, c.missa).is_ok());
}

#[test]
fn test_delete_assignment_cascades_to_suggestions_only() {
    let mut c = seeded_catalog();

    assignment_ops::delete_antiphona_missa(&mut c.store, c.assignment).unwrap();

    assert_eq!(c.store.count::<Suggestion>(), 0);
    assert_eq!(c.store.count::<Missa>(), 1);
}

#[test]
fn test_delete_referenced_documentum_is_protected() {
    // GIVEN a Documentum referenced by one assignment
    let mut c = seeded_catalog();
    let before = c.store.clone();

    // WHEN deleting it
    let result = reference_ops::delete_documentum(&mut c.store, c.graduale);

    // THEN the deletion is refused with a referential-integrity error
    assert_eq!(
        result,
        Err(CatalogError::Protected {
            entity: "Documentum",
            id: c.graduale,
            references: 1
        })
    );
    let ex: ExError = result.unwrap_err().into();
    assert_eq!(ex.kind(), ExErrorKind::ReferentialIntegrity);
    assert_eq!(ex.code(), "ERR_REFERENTIAL_INTEGRITY");

    // AND nothing changed
    assert_eq!(c.store.count::<Documentum>(), before.count::<Documentum>());
    assert_eq!(
        c.store.count::<AntiphonaMissa>(),
        before.count::<AntiphonaMissa>()
    );
}

#[test]
fn test_delete_referenced_anno_is_protected() {
    let mut c = seeded_catalog();
    let result = reference_ops::delete_anno(&mut c.store, c.anno_a);
    assert!(matches!(result, Err(CatalogError::Protected { .. })));
}

#[test]
fn test_delete_referenced_antiphona_type_is_protected() {
    let mut c = seeded_catalog();
    let result = reference_ops::delete_antiphona_type(&mut c.store, c.introito);
    assert!(matches!(result, Err(CatalogError::Protected { .. })));

    // memberships survive the refused delete
    assert_eq!(c.store.count::<MissaTypeAntiphonaType>(), 3);
}

#[test]
fn test_delete_unreferenced_documentum_succeeds_after_assignment_removed() {
    let mut c = seeded_catalog();
    assignment_ops::delete_antiphona_missa(&mut c.store, c.assignment).unwrap();

    reference_ops::delete_documentum(&mut c.store, c.graduale).unwrap();
    assert_eq!(c.store.count::<Documentum>(), 0);
}

#[test]
fn test_delete_unreferenced_antiphona_type_removes_memberships() {
    // GIVEN Communio is a member of Dominica but no assignment uses it
    let mut c = seeded_catalog();

    // WHEN deleting Communio
    reference_ops::delete_antiphona_type(&mut c.store, c.communio).unwrap();

    // THEN its membership is gone and the others keep their order
    let ordered: Vec<_> = queries::ordered_antiphona_types(&c.store, c.dominica)
        .unwrap()
        .into_iter()
        .map(|t| t.name.clone())
        .collect();
    assert_eq!(ordered, vec!["Introito", "Offertorium"]);
    assert_eq!(c.store.count::<AntiphonaType>(), 2);
}

#[test]
fn test_delete_missa_type_rewrites_missae_to_default() {
    // GIVEN a Missa filed under "Feria"
    let mut c = seeded_catalog();
    let feria = missa_type_ops::create_missa_type(&mut c.store, "Feria".to_string()).unwrap();
    missa_type_ops::add_member(&mut c.store, feria, c.communio, 1).unwrap();
    let feria_missa = missa_ops::create_missa(
        &mut c.store,
        "Feria IV Cinerum".to_string(),
        Some(feria),
        &DominicaResolver,
    )
    .unwrap();

    // WHEN deleting "Feria"
    missa_type_ops::delete_missa_type(&mut c.store, feria, &DominicaResolver).unwrap();

    // THEN the Missa now points at Dominica and Feria's memberships are gone
    let missa = missa_ops::read_missa(&c.store, feria_missa).unwrap();
    assert_eq!(missa.missa_type_id, c.dominica);
    assert_eq!(c.store.count::<MissaTypeAntiphonaType>(), 3);
    assert_eq!(c.store.count::<AntiphonaMissa>(), 1);
}

#[test]
fn test_delete_default_missa_type_recreates_it() {
    // GIVEN the Missa under Dominica
    let mut c = seeded_catalog();

    // WHEN the Dominica row itself is deleted
    missa_type_ops::delete_missa_type(&mut c.store, c.dominica, &DominicaResolver).unwrap();

    // THEN a fresh Dominica row exists under a new key, without members
    let fresh = missa_type_ops::find_default_missa_type(&c.store).unwrap();
    assert_ne!(fresh, c.dominica);
    assert!(queries::members_of(&c.store, fresh).unwrap().is_empty());

    // AND the Missa was re-pointed at it
    assert_eq!(
        missa_ops::read_missa(&c.store, c.missa).unwrap().missa_type_id,
        fresh
    );
    assert_eq!(c.store.count::<MissaType>(), 1);
}

#[test]
fn test_delete_missa_type_failing_resolver_leaves_store_untouched() {
    // GIVEN a resolver pointing at a MissaType that does not exist
    let mut c = seeded_catalog();
    let before = c.store.clone();
    let broken = FixedMissaTypeResolver::new(999);

    // WHEN deleting the MissaType of an existing Missa
    let result = missa_type_ops::delete_missa_type(&mut c.store, c.dominica, &broken);

    // THEN the error surfaces and the store is unchanged
    assert!(matches!(result, Err(CatalogError::NotFound { id: 999, .. })));
    assert_eq!(c.store.count::<MissaType>(), before.count::<MissaType>());
    assert_eq!(
        c.store.count::<MissaTypeAntiphonaType>(),
        before.count::<MissaTypeAntiphonaType>()
    );
}

#[test]
fn test_delete_unknown_rows_report_not_found() {
    let mut c = seeded_catalog();
    assert_eq!(
        missa_ops::delete_missa(&mut c.store, 404),
        Err(CatalogError::NotFound {
            entity: "Missa",
            id: 404
        })
    );
    assert!(matches!(
        missa_type_ops::delete_missa_type(&mut c.store, 404, &DominicaResolver),
        Err(CatalogError::NotFound {
            entity: "MissaType",
            ..
        })
    ));
}

#[test]
fn test_keys_are_not_reused_after_delete() {
    let mut c = seeded_catalog();
    missa_ops::delete_missa(&mut c.store, c.missa).unwrap();

    let next = missa_ops::create_missa(
        &mut c.store,
        "Dominica II Adventus".to_string(),
        None,
        &DominicaResolver,
    )
    .unwrap();
    assert!(next > c.missa);
}
