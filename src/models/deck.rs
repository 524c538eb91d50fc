use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::card::Card;
use super::scalar::Identifier;

// ---------------------------------------------------------------------------
// Category — deck-wide attribute shared by every card
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Identifier,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// Deck — one element of the `/decks` response array
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    pub cards: Vec<Card>,
    pub categories: Vec<Category>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
