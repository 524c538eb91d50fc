//! Reporter blocks as the host calls them: card JSON text and other block
//! arguments in, a string or number out.

use crate::codec::{self, decode_card};
use crate::error::Result;
use crate::models::Identifier;
use crate::queries::{self, CardQuery, CategorySelector};

/// `categories for [CARD]`
pub fn get_card_categories(card: &str) -> Result<String> {
    let card = decode_card(card)?;
    CardQuery::new(&card).categories_report()
}

/// Category listing in the first release's format, `<categoryId>-<categoryName>:<value>` per line.
pub fn get_card_categories_legacy(card: &str) -> Result<String> {
    let card = decode_card(card)?;
    Ok(CardQuery::new(&card).legacy_categories_report())
}

/// `card name [CARD]`, as `card-<id>-<name>`.
pub fn get_card_name(card: &str) -> Result<String> {
    let card = decode_card(card)?;
    Ok(CardQuery::new(&card).name())
}

/// The card's plain `name` field.
pub fn get_card_bare_name(card: &str) -> Result<String> {
    let card = decode_card(card)?;
    Ok(CardQuery::new(&card).bare_name().to_string())
}

/// `value of category [POSITION] of [CARD]`
pub fn get_category_value(card: &str, position: &str) -> Result<String> {
    let card = decode_card(card)?;
    let position = codec::parse_position(position)?;
    Ok(CardQuery::new(&card).category_value(position)?.to_string())
}

/// `compare [CARD1] and [CARD2] on [POSITION]`
pub fn compare_cards_on_category(card1: &str, card2: &str, position: &str) -> Result<f64> {
    let selector = CategorySelector::ByPosition(codec::parse_position(position)?);
    compare(card1, card2, &selector)
}

/// Compare on the category whose id equals `category_id`.
pub fn compare_cards_on_category_id(card1: &str, card2: &str, category_id: &str) -> Result<f64> {
    let selector = CategorySelector::ByCategoryId(Identifier::from(category_id.trim()));
    compare(card1, card2, &selector)
}

fn compare(card1: &str, card2: &str, selector: &CategorySelector) -> Result<f64> {
    let card1 = decode_card(card1)?;
    let card2 = decode_card(card2)?;
    queries::compare_cards_on_category(&card1, &card2, selector)
}
