//! Async wrapper around [`CambrianDecks`] for use in async runtimes (Tokio, etc.).
//!
//! Fetches run on a blocking thread pool via [`tokio::task::spawn_blocking`],
//! keeping the async event loop free. Storage is shared as
//! `Arc<Mutex<_>>` and locked only while items are appended, so two loads
//! targeting the same list may interleave their appends.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::{Arc, Mutex};
//! use cambrian_decks::{AsyncCambrianDecks, InMemoryStorage};
//!
//! #[tokio::main]
//! async fn main() {
//!     let decks = AsyncCambrianDecks::builder().build().await.unwrap();
//!     let storage = Arc::new(Mutex::new(InMemoryStorage::new()));
//!
//!     decks.load_deck(storage.clone(), "42", "All Cards", "True").await;
//! }
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::config::IdParam;
use crate::error::{DecksError, Result};
use crate::loader::{LoadFailure, LoadOutcome, LoadRequest};
use crate::source::{DeckSource, HttpDeckSource};
use crate::storage::ListStorage;
use crate::{CambrianDecks, CambrianDecksBuilder};

// ---------------------------------------------------------------------------
// AsyncCambrianDecksBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncCambrianDecks`] instance.
#[derive(Debug, Clone, Default)]
pub struct AsyncCambrianDecksBuilder {
    inner: CambrianDecksBuilder,
}

impl AsyncCambrianDecksBuilder {
    /// Set the deck service base URL.
    pub fn host(mut self, host: &str) -> Self {
        self.inner = self.inner.host(host);
        self
    }

    /// Choose the query parameter the id is sent under.
    pub fn id_param(mut self, id_param: IdParam) -> Self {
        self.inner = self.inner.id_param(id_param);
        self
    }

    /// Set the per-list capacity.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.inner = self.inner.capacity(capacity);
        self
    }

    /// Set an HTTP timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    /// Build against the HTTP deck service.
    ///
    /// The blocking HTTP client is created on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncCambrianDecks> {
        let inner = self.inner;
        let decks = tokio::task::spawn_blocking(move || inner.build())
            .await
            .map_err(|e| DecksError::Internal(format!("Task join error: {e}")))??;
        Ok(AsyncCambrianDecks {
            inner: Arc::new(decks),
        })
    }

    /// Build against a caller-supplied source.
    pub fn build_with_source<S>(self, source: S) -> AsyncCambrianDecks<S>
    where
        S: DeckSource + Send + Sync + 'static,
    {
        AsyncCambrianDecks {
            inner: Arc::new(self.inner.build_with_source(source)),
        }
    }
}

// ---------------------------------------------------------------------------
// AsyncCambrianDecks
// ---------------------------------------------------------------------------

/// Async wrapper around [`CambrianDecks`].
///
/// Only loading touches the network, so only loading is async; the reporter
/// blocks are reachable synchronously through [`inner()`](Self::inner).
pub struct AsyncCambrianDecks<S = HttpDeckSource> {
    inner: Arc<CambrianDecks<S>>,
}

impl AsyncCambrianDecks {
    /// Create a new builder for configuring the async client.
    pub fn builder() -> AsyncCambrianDecksBuilder {
        AsyncCambrianDecksBuilder::default()
    }
}

impl<S> Clone for AsyncCambrianDecks<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S> AsyncCambrianDecks<S>
where
    S: DeckSource + Send + Sync + 'static,
{
    /// The wrapped synchronous instance.
    pub fn inner(&self) -> &CambrianDecks<S> {
        &self.inner
    }

    /// Async form of [`CambrianDecks::load_deck`]. Never fails.
    pub async fn load_deck<T>(
        &self,
        storage: Arc<Mutex<T>>,
        project_id: &str,
        list_name: &str,
        shuffle: &str,
    ) where
        T: ListStorage + Send + 'static,
    {
        let _ = self.try_load_deck(storage, project_id, list_name, shuffle).await;
    }

    /// Async form of [`CambrianDecks::try_load_deck`].
    pub async fn try_load_deck<T>(
        &self,
        storage: Arc<Mutex<T>>,
        project_id: &str,
        list_name: &str,
        shuffle: &str,
    ) -> LoadOutcome
    where
        T: ListStorage + Send + 'static,
    {
        let request = match LoadRequest::from_args(project_id, list_name, shuffle) {
            Ok(request) => request,
            Err(e) => return log_failure(LoadFailure::from(e)),
        };
        self.load(storage, request).await
    }

    /// Fetch on the blocking pool, then lock `storage` just long enough to append.
    pub async fn load<T>(&self, storage: Arc<Mutex<T>>, request: LoadRequest) -> LoadOutcome
    where
        T: ListStorage + Send + 'static,
    {
        let decks = self.inner.clone();
        let joined = tokio::task::spawn_blocking(move || -> Result<LoadOutcome> {
            let loader = decks.loader();
            let deck = loader.fetch_first_deck(request.project_id)?;
            let mut guard = storage
                .lock()
                .map_err(|_| DecksError::Internal("storage lock poisoned".into()))?;
            loader.store_deck(
                &mut *guard,
                &request.list_name,
                deck,
                request.shuffle,
                &mut rand::thread_rng(),
            )
        })
        .await;

        match joined {
            Ok(Ok(outcome)) => {
                eprintln!("Deck load completed: {:?}", outcome);
                outcome
            }
            Ok(Err(e)) => log_failure(LoadFailure::from(e)),
            Err(e) => log_failure(LoadFailure::Internal(format!("Task join error: {e}"))),
        }
    }

    /// Release the client on the blocking pool.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || drop(self))
            .await
            .map_err(|e| DecksError::Internal(format!("Task join error: {e}")))
    }
}

fn log_failure(failure: LoadFailure) -> LoadOutcome {
    eprintln!("Error loading deck: {}", failure);
    LoadOutcome::Failed(failure)
}
