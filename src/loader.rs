//! Deck Loader: fetch the first deck of a project and append its cards and
//! categories to host lists.
//!
//! Loading never fails across the host boundary. Every problem is folded into
//! a [`LoadOutcome`], logged, and otherwise dropped by the caller.

use std::fmt;

use rand::prelude::*;

use crate::codec::{self, ShuffleFlag};
use crate::config::{self, CATEGORIES_LIST_NAME};
use crate::error::{DecksError, Result};
use crate::models::Deck;
use crate::source::DeckSource;
use crate::storage::{append_bounded, InsertOutcome, ListStorage};

// ---------------------------------------------------------------------------
// LoadRequest
// ---------------------------------------------------------------------------

/// Validated arguments of the load block.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRequest {
    pub project_id: i64,
    pub list_name: String,
    pub shuffle: ShuffleFlag,
}

impl LoadRequest {
    pub fn new(project_id: i64, list_name: &str, shuffle: ShuffleFlag) -> Result<Self> {
        Ok(Self {
            project_id,
            list_name: codec::parse_list_name(list_name)?.to_string(),
            shuffle,
        })
    }

    /// Build a request from the raw block arguments.
    pub fn from_args(project_id: &str, list_name: &str, shuffle: &str) -> Result<Self> {
        Self::new(
            codec::parse_project_id(project_id)?,
            list_name,
            ShuffleFlag::from_arg(shuffle),
        )
    }
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Per-list insertion counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertTally {
    pub inserted: usize,
    pub dropped: usize,
}

impl InsertTally {
    fn record(&mut self, outcome: InsertOutcome) {
        match outcome {
            InsertOutcome::Inserted => self.inserted += 1,
            InsertOutcome::DroppedAtCapacity => self.dropped += 1,
        }
    }
}

/// Why a load stopped before touching storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadFailure {
    InvalidArgument(String),
    Network(String),
    Parse(String),
    EmptyResponse,
    /// The load machinery itself broke (poisoned lock, failed worker task).
    Internal(String),
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadFailure::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            LoadFailure::Network(msg) => write!(f, "network failure: {}", msg),
            LoadFailure::Parse(msg) => write!(f, "malformed deck response: {}", msg),
            LoadFailure::EmptyResponse => f.write_str("deck response contained no decks"),
            LoadFailure::Internal(msg) => write!(f, "internal failure: {}", msg),
        }
    }
}

impl From<DecksError> for LoadFailure {
    fn from(e: DecksError) -> Self {
        match e {
            DecksError::Http(_) => LoadFailure::Network(e.to_string()),
            DecksError::InvalidArgument(msg) => LoadFailure::InvalidArgument(msg),
            DecksError::NotFound(_) => LoadFailure::EmptyResponse,
            DecksError::Internal(msg) => LoadFailure::Internal(msg),
            _ => LoadFailure::Parse(e.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded {
        cards: InsertTally,
        categories: InsertTally,
    },
    Failed(LoadFailure),
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }
}

// ---------------------------------------------------------------------------
// DeckLoader
// ---------------------------------------------------------------------------

/// Loads decks from a [`DeckSource`] into [`ListStorage`].
pub struct DeckLoader<S> {
    source: S,
    capacity: usize,
}

impl<S: DeckSource> DeckLoader<S> {
    /// Create a loader bounding every list at `capacity` items.
    pub fn new(source: S, capacity: usize) -> Self {
        Self { source, capacity }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Fetch the project's decks and keep only the first one.
    ///
    /// Later decks are never decoded, so their shape does not matter.
    pub fn fetch_first_deck(&self, project_id: i64) -> Result<Deck> {
        let body = self.source.fetch_decks(project_id)?;
        let decks: Vec<serde_json::Value> = serde_json::from_str(&body)?;
        let first = decks.into_iter().next().ok_or_else(|| {
            DecksError::NotFound(format!("no decks for project {}", project_id))
        })?;
        Ok(serde_json::from_value(first)?)
    }

    /// Run a load using the thread-local RNG for shuffling.
    pub fn load<T: ListStorage + ?Sized>(
        &self,
        storage: &mut T,
        request: &LoadRequest,
    ) -> LoadOutcome {
        self.load_with_rng(storage, request, &mut thread_rng())
    }

    /// Run a load, shuffling with `rng` when the request asks for it.
    pub fn load_with_rng<T: ListStorage + ?Sized, R: Rng + ?Sized>(
        &self,
        storage: &mut T,
        request: &LoadRequest,
        rng: &mut R,
    ) -> LoadOutcome {
        let result = self
            .fetch_first_deck(request.project_id)
            .and_then(|deck| self.store_deck(storage, &request.list_name, deck, request.shuffle, rng));

        match result {
            Ok(outcome) => {
                if let LoadOutcome::Loaded { cards, categories } = &outcome {
                    eprintln!(
                        "Loaded deck for project {} into '{}': {} cards ({} dropped), {} categories ({} dropped)",
                        request.project_id,
                        request.list_name,
                        cards.inserted,
                        cards.dropped,
                        categories.inserted,
                        categories.dropped
                    );
                }
                outcome
            }
            Err(e) => {
                let failure = LoadFailure::from(e);
                eprintln!("Error loading deck for project {}: {}", request.project_id, failure);
                LoadOutcome::Failed(failure)
            }
        }
    }

    /// Append a deck's cards to `list_name` and its categories to the
    /// shared categories list, each bounded by the loader's capacity.
    ///
    /// Every card and category is encoded before either list is touched, so
    /// an encoding error leaves storage unchanged.
    pub fn store_deck<T: ListStorage + ?Sized, R: Rng + ?Sized>(
        &self,
        storage: &mut T,
        list_name: &str,
        mut deck: Deck,
        shuffle: ShuffleFlag,
        rng: &mut R,
    ) -> Result<LoadOutcome> {
        if shuffle.is_shuffle() {
            shuffle_cards(&mut deck.cards, rng);
        }

        let card_items = deck
            .cards
            .iter()
            .map(codec::encode_card)
            .collect::<Result<Vec<_>>>()?;
        let category_items = deck
            .categories
            .iter()
            .map(codec::encode_category)
            .collect::<Result<Vec<_>>>()?;

        let mut cards = InsertTally::default();
        let deck_list = storage.lookup_or_create_list(&config::list_id(list_name), list_name);
        for item in card_items {
            cards.record(append_bounded(deck_list, item, self.capacity));
        }

        let mut categories = InsertTally::default();
        let categories_list = storage.lookup_or_create_list(
            &config::list_id(CATEGORIES_LIST_NAME),
            CATEGORIES_LIST_NAME,
        );
        for item in category_items {
            categories.record(append_bounded(categories_list, item, self.capacity));
        }

        Ok(LoadOutcome::Loaded { cards, categories })
    }
}

/// Uniform in-place permutation (Fisher–Yates, from the last index down).
pub fn shuffle_cards<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
