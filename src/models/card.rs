use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::scalar::{Identifier, StatValue};

// ---------------------------------------------------------------------------
// Card — one comparable record, stored in host lists as JSON text
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: Identifier,
    pub name: String,
    /// Unordered; see [`CardQuery::ordered_category_values`](crate::queries::CardQuery::ordered_category_values).
    pub category_values: Vec<CategoryValue>,
    /// Fields the service sent that this crate does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// CategoryValue — a card's value for one deck category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryValue {
    pub category_id: Identifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    pub value: StatValue,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
