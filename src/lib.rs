//! Cambrian Decks for Rust.
//!
//! Loads a deck of cards from the Cambrian deck service into a block-based
//! programming host's list storage, and answers the host's reporter blocks
//! (card name, category listing, category value, comparison) over the JSON
//! text those lists hold.
//!
//! # Quick start
//!
//! ```no_run
//! use cambrian_decks::{CambrianDecks, InMemoryStorage};
//!
//! let decks = CambrianDecks::builder().build().unwrap();
//! let mut storage = InMemoryStorage::new();
//!
//! // Never fails: problems are logged and the block just does nothing.
//! decks.load_deck(&mut storage, "42", "All Cards", "True");
//!
//! if let Some(card) = storage.items("All Cards").first() {
//!     println!("{}", decks.get_card_name(card).unwrap());
//!     println!("{}", decks.get_category_value(card, "1").unwrap());
//! }
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod blocks;
pub mod codec;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod queries;
pub mod source;
pub mod storage;

#[cfg(feature = "async")]
pub use async_client::AsyncCambrianDecks;
pub use codec::ShuffleFlag;
pub use config::{IdParam, LoaderConfig};
pub use error::{DecksError, Result};
pub use loader::{DeckLoader, InsertTally, LoadFailure, LoadOutcome, LoadRequest};
pub use models::{Card, Category, CategoryValue, Deck, Identifier, StatValue};
pub use queries::{CardQuery, CategorySelector};
pub use source::{DeckSource, HttpDeckSource};
pub use storage::{HostList, InMemoryStorage, InsertOutcome, ListStorage};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// CambrianDecksBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CambrianDecks`] instance.
///
/// Use [`CambrianDecks::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](CambrianDecksBuilder::build) for the HTTP
/// deck service or [`build_with_source()`](CambrianDecksBuilder::build_with_source)
/// for any other [`DeckSource`].
#[derive(Debug, Clone, Default)]
pub struct CambrianDecksBuilder {
    config: LoaderConfig,
}

impl CambrianDecksBuilder {
    /// Set the deck service base URL.
    ///
    /// Defaults to [`config::DEFAULT_DECK_HOST`].
    pub fn host(mut self, host: &str) -> Self {
        self.config.host = host.to_string();
        self
    }

    /// Choose the query parameter the id is sent under. Defaults to `game_id`.
    pub fn id_param(mut self, id_param: IdParam) -> Self {
        self.config.id_param = id_param;
        self
    }

    /// Set the per-list capacity.
    ///
    /// Defaults to [`config::LIST_ITEM_LIMIT`].
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Set an HTTP timeout. By default requests are never cut short.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Build against the HTTP deck service.
    pub fn build(self) -> Result<CambrianDecks> {
        let source = HttpDeckSource::new(
            &self.config.host,
            self.config.id_param,
            self.config.timeout,
        )?;
        Ok(self.build_with_source(source))
    }

    /// Build against a caller-supplied source. Host, id parameter and
    /// timeout are the source's business; only the capacity applies.
    pub fn build_with_source<S: DeckSource>(self, source: S) -> CambrianDecks<S> {
        let loader = DeckLoader::new(source, self.config.capacity);
        CambrianDecks {
            config: self.config,
            loader,
        }
    }
}

// ---------------------------------------------------------------------------
// CambrianDecks
// ---------------------------------------------------------------------------

/// The host-facing surface: one command block and the reporter blocks.
///
/// Created via [`CambrianDecks::builder()`].
pub struct CambrianDecks<S = HttpDeckSource> {
    config: LoaderConfig,
    loader: DeckLoader<S>,
}

impl CambrianDecks {
    /// Create a new builder.
    pub fn builder() -> CambrianDecksBuilder {
        CambrianDecksBuilder::default()
    }
}

impl<S: DeckSource> CambrianDecks<S> {
    // -- Command block ------------------------------------------------------

    /// `load deck from project id [PROJECT_ID] into list [LIST_NAME] and shuffle [SHUFFLE]`
    ///
    /// Fire-and-forget: whatever goes wrong is logged and swallowed.
    pub fn load_deck<T: ListStorage + ?Sized>(
        &self,
        storage: &mut T,
        project_id: &str,
        list_name: &str,
        shuffle: &str,
    ) {
        let _ = self.try_load_deck(storage, project_id, list_name, shuffle);
    }

    /// Same as [`load_deck`](Self::load_deck) but reports what happened.
    pub fn try_load_deck<T: ListStorage + ?Sized>(
        &self,
        storage: &mut T,
        project_id: &str,
        list_name: &str,
        shuffle: &str,
    ) -> LoadOutcome {
        match LoadRequest::from_args(project_id, list_name, shuffle) {
            Ok(request) => self.loader.load(storage, &request),
            Err(e) => {
                let failure = LoadFailure::from(e);
                eprintln!("Error loading deck: {}", failure);
                LoadOutcome::Failed(failure)
            }
        }
    }

    /// Load with an already validated request.
    pub fn load<T: ListStorage + ?Sized>(&self, storage: &mut T, request: &LoadRequest) -> LoadOutcome {
        self.loader.load(storage, request)
    }

    // -- Reporter blocks ----------------------------------------------------

    /// `categories for [CARD]`
    pub fn get_card_categories(&self, card: &str) -> Result<String> {
        blocks::get_card_categories(card)
    }

    /// `compare [CARD1] and [CARD2] on [POSITION]`
    pub fn compare_cards_on_category(&self, card1: &str, card2: &str, position: &str) -> Result<f64> {
        blocks::compare_cards_on_category(card1, card2, position)
    }

    /// `card name [CARD]`
    pub fn get_card_name(&self, card: &str) -> Result<String> {
        blocks::get_card_name(card)
    }

    /// `value of category [POSITION] of [CARD]`
    pub fn get_category_value(&self, card: &str, position: &str) -> Result<String> {
        blocks::get_category_value(card, position)
    }

    // -- Accessors ----------------------------------------------------------

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn loader(&self) -> &DeckLoader<S> {
        &self.loader
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl<S> fmt::Display for CambrianDecks<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CambrianDecks(host={}, id_param={}, capacity={})",
            self.config.host, self.config.id_param, self.config.capacity
        )
    }
}
