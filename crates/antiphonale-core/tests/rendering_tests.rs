#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use antiphonale_core::errors::CatalogError;
use antiphonale_core::render::render_missa;
use common::seeded_catalog;

#[test]
fn test_render_missa_proper() {
    // GIVEN the seeded Missa with Introito assigned
    let c = seeded_catalog();

    // WHEN rendering it
    let md = render_missa(&c.store, c.missa).unwrap();

    // THEN the heading, the assigned antiphona and its context appear
    assert!(md.starts_with("# Dominica I Adventus\n"));
    assert!(md.contains("**MissaType**: Dominica"));
    assert!(md.contains("## Antiphona ad Introito\n\n### Ad te levavi"));
    assert!(md.contains("> Ad te levavi animam meam"));
    assert!(md.contains("- **Psalmus**: Ps. 24, 4"));
    assert!(md.contains("- **Anno A**"));
    assert!(md.contains("- **Documentum**: Graduale Romanum"));
    assert!(md.contains("- Suggestion: Ad te levavi (Gregorian (Liber Usualis)), similarity 99.50"));

    // AND unassigned member types are listed in order
    let offertorium = md.find("## Antiphona ad Offertorium").unwrap();
    let communio = md.find("## Antiphona ad Communio").unwrap();
    assert!(offertorium < communio);
}

#[test]
fn test_render_is_deterministic() {
    let c = seeded_catalog();
    assert_eq!(
        render_missa(&c.store, c.missa).unwrap(),
        render_missa(&c.store, c.missa).unwrap()
    );
}

#[test]
fn test_render_unknown_missa() {
    let c = seeded_catalog();
    assert_eq!(
        render_missa(&c.store, 404),
        Err(CatalogError::NotFound {
            entity: "Missa",
            id: 404
        })
    );
}
