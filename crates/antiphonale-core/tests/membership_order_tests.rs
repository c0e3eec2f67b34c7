#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use antiphonale_core::errors::CatalogError;
use antiphonale_core::ops::{missa_type_ops, reference_ops};
use antiphonale_core::queries;
use antiphonale_core::render::display_membership;
use common::seeded_catalog;

fn type_names(c: &common::Catalog) -> Vec<String> {
    queries::ordered_antiphona_types(&c.store, c.dominica)
        .unwrap()
        .into_iter()
        .map(|t| t.name.clone())
        .collect()
}

#[test]
fn test_members_listed_by_order_not_insertion() {
    // GIVEN a MissaType whose members are inserted out of order
    let mut c = seeded_catalog();
    let feria = missa_type_ops::create_missa_type(&mut c.store, "Feria".to_string()).unwrap();
    missa_type_ops::add_member(&mut c.store, feria, c.communio, 30).unwrap();
    missa_type_ops::add_member(&mut c.store, feria, c.introito, 10).unwrap();
    missa_type_ops::add_member(&mut c.store, feria, c.offertorium, 20).unwrap();

    // WHEN listing its AntiphonaTypes
    let names: Vec<_> = queries::ordered_antiphona_types(&c.store, feria)
        .unwrap()
        .into_iter()
        .map(|t| t.name.clone())
        .collect();

    // THEN they come back by ascending order
    assert_eq!(names, vec!["Introito", "Offertorium", "Communio"]);
}

#[test]
fn test_reorder_changes_listing() {
    // GIVEN Introito at order 1
    let mut c = seeded_catalog();
    let introito_member = queries::members_of(&c.store, c.dominica).unwrap()[0].id;

    // WHEN it is moved behind Communio
    missa_type_ops::update_member_order(&mut c.store, introito_member, 100).unwrap();

    // THEN the listing follows the new order
    assert_eq!(type_names(&c), vec!["Offertorium", "Communio", "Introito"]);
}

#[test]
fn test_reorder_to_own_order_is_allowed() {
    let mut c = seeded_catalog();
    let first = queries::members_of(&c.store, c.dominica).unwrap()[0].id;
    assert!(missa_type_ops::update_member_order(&mut c.store, first, 1).is_ok());
}

#[test]
fn test_duplicate_order_rejected() {
    let mut c = seeded_catalog();
    let extra = reference_ops::create_antiphona_type(&mut c.store, "Graduale".to_string()).unwrap();

    let result = missa_type_ops::add_member(&mut c.store, c.dominica, extra, 2);
    assert_eq!(
        result,
        Err(CatalogError::DuplicateOrder {
            missa_type_id: c.dominica,
            order: 2
        })
    );
}

#[test]
fn test_order_bounds() {
    let mut c = seeded_catalog();
    let extra = reference_ops::create_antiphona_type(&mut c.store, "Graduale".to_string()).unwrap();

    assert!(matches!(
        missa_type_ops::add_member(&mut c.store, c.dominica, extra, 0),
        Err(CatalogError::InvalidOrder { order: 0, .. })
    ));
    assert!(matches!(
        missa_type_ops::add_member(&mut c.store, c.dominica, extra, 32768),
        Err(CatalogError::InvalidOrder { order: 32768, .. })
    ));
    assert!(missa_type_ops::add_member(&mut c.store, c.dominica, extra, 32767).is_ok());
}

#[test]
fn test_membership_display_text() {
    let c = seeded_catalog();
    let members = queries::members_of(&c.store, c.dominica).unwrap();
    assert_eq!(
        display_membership(&c.store, members[0]).unwrap(),
        "Dominica - (1) Antiphona ad Introito"
    );
}

#[test]
fn test_remove_member_keeps_both_sides() {
    let mut c = seeded_catalog();
    let first = queries::members_of(&c.store, c.dominica).unwrap()[0].id;

    missa_type_ops::remove_member(&mut c.store, first).unwrap();

    assert_eq!(type_names(&c), vec!["Offertorium", "Communio"]);
    assert!(c
        .store
        .contains::<antiphonale_core::AntiphonaType>(c.introito));
}
