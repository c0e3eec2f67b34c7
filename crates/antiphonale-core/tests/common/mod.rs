use antiphonale_core::model::{AntiphonaMissaDraft, SuggestionDraft};
use antiphonale_core::ops::{
    antiphona_ops, assignment_ops, missa_ops, missa_type_ops, reference_ops, suggestion_ops,
};
use antiphonale_core::{DominicaResolver, Store};
use rust_decimal::Decimal;

/// Keys of the rows created by `seeded_catalog`
#[allow(dead_code)]
pub struct Catalog {
    pub store: Store,
    pub dominica: i64,
    pub introito: i64,
    pub offertorium: i64,
    pub communio: i64,
    pub anno_a: i64,
    pub graduale: i64,
    pub missa: i64,
    pub antiphona: i64,
    pub assignment: i64,
    pub suggestion: i64,
}

/// A small catalog: the default MissaType with three ordered members, one
/// Missa with one assigned Antiphona and one Suggestion
#[allow(dead_code)]
pub fn seeded_catalog() -> Catalog {
    let mut store = Store::new();

    let dominica = missa_type_ops::resolve_default_missa_type(&mut store).unwrap();
    let introito = reference_ops::create_antiphona_type(&mut store, "Introito".to_string()).unwrap();
    let offertorium =
        reference_ops::create_antiphona_type(&mut store, "Offertorium".to_string()).unwrap();
    let communio = reference_ops::create_antiphona_type(&mut store, "Communio".to_string()).unwrap();
    missa_type_ops::add_member(&mut store, dominica, introito, 1).unwrap();
    missa_type_ops::add_member(&mut store, dominica, offertorium, 2).unwrap();
    missa_type_ops::add_member(&mut store, dominica, communio, 3).unwrap();

    let anno_a = reference_ops::create_anno(&mut store, "A".to_string()).unwrap();
    let graduale =
        reference_ops::create_documentum(&mut store, "Graduale Romanum".to_string()).unwrap();

    let missa = missa_ops::create_missa(
        &mut store,
        "Dominica I Adventus".to_string(),
        None,
        &DominicaResolver,
    )
    .unwrap();
    let antiphona = antiphona_ops::create_antiphona(
        &mut store,
        "Ad te levavi".to_string(),
        "Ad te levavi animam meam: Deus meus, in te confido, non erubescam".to_string(),
    )
    .unwrap();

    let assignment = assignment_ops::create_antiphona_missa(
        &mut store,
        AntiphonaMissaDraft {
            antiphona_id: antiphona,
            missa_id: missa,
            anno_id: Some(anno_a),
            antiphona_type_id: introito,
            documentum_id: graduale,
            psalm: "Ps. 24, 4".to_string(),
            ..Default::default()
        },
    )
    .unwrap();

    let suggestion = suggestion_ops::create_suggestion(
        &mut store,
        SuggestionDraft {
            song_name: "Ad te levavi".to_string(),
            author: "Gregorian (Liber Usualis)".to_string(),
            similarity: Decimal::new(9950, 2),
            antiphona_missa_id: assignment,
            ..Default::default()
        },
    )
    .unwrap();

    Catalog {
        store,
        dominica,
        introito,
        offertorium,
        communio,
        anno_a,
        graduale,
        missa,
        antiphona,
        assignment,
        suggestion,
    }
}
