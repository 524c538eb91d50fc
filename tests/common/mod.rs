//! Shared test fixtures for the Cambrian Decks integration tests.
//!
//! Provides canned `/decks` responses and `FixtureSource`, a `DeckSource`
//! that serves them without touching the network.

#![allow(dead_code)]

use std::sync::Mutex;

use cambrian_decks::{Card, DecksError, DeckSource, Result};

/// The single-card deck used by the end-to-end scenario.
pub fn fox_deck_json() -> serde_json::Value {
    serde_json::json!([
        {
            "cards": [
                {
                    "id": 1,
                    "name": "Fox",
                    "categoryValues": [
                        { "categoryId": 2, "value": "5" },
                        { "categoryId": 1, "value": "10" }
                    ]
                }
            ],
            "categories": [
                { "id": 1, "name": "Speed" },
                { "id": 2, "name": "Stealth" }
            ]
        }
    ])
}

/// A four-card deck with named categories, followed by a second deck that
/// must be ignored.
pub fn forest_decks_json() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 7,
            "name": "Forest",
            "cards": [
                card_json(1, "Fox", &[(3, "Cunning", "8"), (1, "Speed", "10"), (2, "Stealth", "5")]),
                card_json(2, "Owl", &[(2, "Stealth", "9"), (3, "Cunning", "7.5"), (1, "Speed", "4.5")]),
                card_json(3, "Bear", &[(1, "Speed", "3"), (2, "Stealth", "1"), (3, "Cunning", "2")]),
                card_json(4, "Hare", &[(1, "Speed", "12"), (3, "Cunning", "1"), (2, "Stealth", "6")])
            ],
            "categories": [
                { "id": 1, "name": "Speed" },
                { "id": 2, "name": "Stealth" },
                { "id": 3, "name": "Cunning" }
            ]
        },
        {
            "id": 8,
            "name": "Ocean",
            "cards": [card_json(9, "Shark", &[(1, "Speed", "11")])],
            "categories": [{ "id": 1, "name": "Speed" }]
        }
    ])
}

pub fn card_json(id: i64, name: &str, values: &[(i64, &str, &str)]) -> serde_json::Value {
    let category_values: Vec<serde_json::Value> = values
        .iter()
        .map(|(category_id, category_name, value)| {
            serde_json::json!({
                "categoryId": category_id,
                "categoryName": category_name,
                "value": value
            })
        })
        .collect();
    serde_json::json!({ "id": id, "name": name, "categoryValues": category_values })
}

pub fn card(json: serde_json::Value) -> Card {
    serde_json::from_value(json).unwrap()
}

pub fn card_text(json: serde_json::Value) -> String {
    serde_json::to_string(&json).unwrap()
}

/// Serves a fixed response body and records the ids it was asked for.
pub struct FixtureSource {
    body: Option<String>,
    pub requests: Mutex<Vec<i64>>,
}

impl FixtureSource {
    pub fn new(body: serde_json::Value) -> Self {
        Self::raw(&body.to_string())
    }

    pub fn raw(body: &str) -> Self {
        Self {
            body: Some(body.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A source whose every fetch fails.
    pub fn failing() -> Self {
        Self {
            body: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<i64> {
        self.requests.lock().unwrap().clone()
    }
}

impl DeckSource for FixtureSource {
    fn fetch_decks(&self, project_id: i64) -> Result<String> {
        self.requests.lock().unwrap().push(project_id);
        self.body
            .clone()
            .ok_or_else(|| DecksError::InvalidValue("fixture source has no body".to_string()))
    }
}
