#![allow(dead_code)]

use antiphonale_core::model::{AntiphonaMissaDraft, SuggestionDraft};
use antiphonale_store::db::open_catalog_in_memory;
use antiphonale_store::SqliteRepo;
use rusqlite::Connection;
use rust_decimal::Decimal;

/// Keys of the rows created by `seeded_db`
pub struct Seeded {
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

/// A migrated in-memory database holding one Advent Sunday proper
pub fn seeded_db() -> (Connection, Seeded) {
    let mut conn = open_catalog_in_memory().unwrap();

    let dominica = SqliteRepo::resolve_default_missa_type(&mut conn).unwrap();
    let introito = SqliteRepo::create_antiphona_type(&conn, "Introito").unwrap();
    let offertorium = SqliteRepo::create_antiphona_type(&conn, "Offertorium").unwrap();
    let communio = SqliteRepo::create_antiphona_type(&conn, "Communio").unwrap();
    SqliteRepo::add_member(&conn, dominica, introito, 1).unwrap();
    SqliteRepo::add_member(&conn, dominica, offertorium, 2).unwrap();
    SqliteRepo::add_member(&conn, dominica, communio, 3).unwrap();

    let anno_a = SqliteRepo::create_anno(&conn, "A").unwrap();
    let graduale = SqliteRepo::create_documentum(&conn, "Graduale Romanum").unwrap();
    let missa = SqliteRepo::create_missa(&mut conn, "Dominica I Adventus", None).unwrap();
    let antiphona = SqliteRepo::create_antiphona(
        &conn,
        "Ad te levavi",
        "Ad te levavi animam meam: Deus meus, in te confido, non erubescam",
    )
    .unwrap();

    let assignment = SqliteRepo::create_antiphona_missa(
        &conn,
        &AntiphonaMissaDraft {
            antiphona_id: antiphona,
            missa_id: missa,
            anno_id: Some(anno_a),
            evangelium: None,
            antiphona_type_id: introito,
            documentum_id: graduale,
            psalm: "Ps. 24, 4".to_string(),
            alt_psalm: String::new(),
        },
    )
    .unwrap();

    let suggestion = SqliteRepo::create_suggestion(
        &conn,
        &SuggestionDraft {
            song_name: "Ad te levavi".to_string(),
            author: "Gregorian (Liber Usualis)".to_string(),
            audio_link: String::new(),
            sheet_link: String::new(),
            similarity: Decimal::new(9950, 2),
            antiphona_missa_id: assignment,
        },
    )
    .unwrap();

    (
        conn,
        Seeded {
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
        },
    )
}
