//! Where decks come from.
//!
//! [`HttpDeckSource`] talks to the deck service; tests and embedders can plug
//! in any other [`DeckSource`].

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::IdParam;
use crate::error::Result;

/// A provider of the raw `/decks` response body.
pub trait DeckSource {
    /// Fetch the JSON text listing the decks of `project_id`.
    fn fetch_decks(&self, project_id: i64) -> Result<String>;
}

/// Build `<host>/decks?<id-param>=<id>`.
pub fn decks_url(host: &str, id_param: IdParam, project_id: i64) -> String {
    format!(
        "{}/decks?{}={}",
        host.trim_end_matches('/'),
        id_param.as_str(),
        project_id
    )
}

/// Fetches decks from the deck service over HTTP.
///
/// One plain `GET` per call: no auth, no extra headers, no retries.
pub struct HttpDeckSource {
    host: String,
    id_param: IdParam,
    client: Client,
}

impl HttpDeckSource {
    /// Create a source for `host`.
    ///
    /// A `timeout` of `None` waits for the service indefinitely.
    pub fn new(host: &str, id_param: IdParam, timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            host: host.to_string(),
            id_param,
            client,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}

impl DeckSource for HttpDeckSource {
    fn fetch_decks(&self, project_id: i64) -> Result<String> {
        let url = decks_url(&self.host, self.id_param, project_id);
        eprintln!("Fetching decks from {}", url);
        let resp = self.client.get(&url).send()?.error_for_status()?;
        Ok(resp.text()?)
    }
}
