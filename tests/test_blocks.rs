//! Host-facing reporter blocks: card JSON text in, text or number out.

mod common;

use cambrian_decks::blocks;
use cambrian_decks::{CambrianDecks, DecksError};

fn fox_text() -> String {
    common::card_text(common::card_json(
        1,
        "Fox",
        &[(2, "Stealth", "5"), (1, "Speed", "10")],
    ))
}

fn owl_text() -> String {
    common::card_text(common::card_json(
        2,
        "Owl",
        &[(1, "Speed", "4.5"), (2, "Stealth", "9")],
    ))
}

#[test]
fn get_card_name_composes_id_and_name() {
    assert_eq!(blocks::get_card_name(&fox_text()).unwrap(), "card-1-Fox");
    assert_eq!(blocks::get_card_bare_name(&fox_text()).unwrap(), "Fox");
}

#[test]
fn get_card_categories_reports_each_position() {
    let report = blocks::get_card_categories(&fox_text()).unwrap();
    assert_eq!(report, "\ncard-1-Fox\n1-Speed:10\n2-Stealth:5\n");
}

#[test]
fn get_card_categories_legacy_uses_category_ids() {
    let report = blocks::get_card_categories_legacy(&fox_text()).unwrap();
    assert_eq!(report, "2-Stealth:5\n1-Speed:10");
}

#[test]
fn get_category_value_returns_stored_text() {
    assert_eq!(blocks::get_category_value(&fox_text(), "1").unwrap(), "10");
    assert_eq!(blocks::get_category_value(&owl_text(), "1").unwrap(), "4.5");
}

#[test]
fn get_category_value_out_of_range_errors() {
    let err = blocks::get_category_value(&fox_text(), "3").unwrap_err();
    assert!(matches!(err, DecksError::PositionOutOfRange { position: 3, len: 2 }));
}

#[test]
fn compare_on_position() {
    assert_eq!(
        blocks::compare_cards_on_category(&fox_text(), &owl_text(), "1").unwrap(),
        5.5
    );
    assert_eq!(
        blocks::compare_cards_on_category(&fox_text(), &owl_text(), "2").unwrap(),
        -4.0
    );
}

#[test]
fn compare_on_category_id() {
    assert_eq!(
        blocks::compare_cards_on_category_id(&fox_text(), &owl_text(), "2").unwrap(),
        -4.0
    );
    let err = blocks::compare_cards_on_category_id(&fox_text(), &owl_text(), "7").unwrap_err();
    assert!(matches!(err, DecksError::CategoryNotFound(_)));
}

#[test]
fn malformed_card_text_errors() {
    assert!(matches!(
        blocks::get_card_name("not a card"),
        Err(DecksError::Json(_))
    ));
    assert!(blocks::compare_cards_on_category(&fox_text(), "{}", "1").is_err());
}

#[test]
fn facade_delegates_to_blocks() {
    let decks = CambrianDecks::builder()
        .build_with_source(common::FixtureSource::new(common::fox_deck_json()));
    assert_eq!(decks.get_card_name(&fox_text()).unwrap(), "card-1-Fox");
    assert_eq!(decks.get_category_value(&fox_text(), "2").unwrap(), "5");
    assert_eq!(
        decks.compare_cards_on_category(&owl_text(), &fox_text(), "1").unwrap(),
        -5.5
    );
    assert!(decks.get_card_categories(&owl_text()).unwrap().contains("1-Speed:4.5"));
    assert_eq!(
        decks.to_string(),
        "CambrianDecks(host=https://cambrian-gg.herokuapp.com/scratch, id_param=game_id, capacity=200000)"
    );
}
