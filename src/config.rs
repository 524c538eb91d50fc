use std::fmt;
use std::time::Duration;

pub const DEFAULT_DECK_HOST: &str = "https://cambrian-gg.herokuapp.com/scratch";

/// Maximum number of items the host lets a single list hold.
pub const LIST_ITEM_LIMIT: usize = 200_000;

/// Name of the list every deck's category descriptors are appended to.
pub const CATEGORIES_LIST_NAME: &str = "Categories";

pub const LIST_ID_PREFIX: &str = "cambrian.decks.";

/// Host-side list id for a list name (`All Cards` -> `cambrian.decks.All Cards`).
pub fn list_id(list_name: &str) -> String {
    format!("{}{}", LIST_ID_PREFIX, list_name)
}

/// Query parameter the deck service expects the numeric id under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdParam {
    /// `?project_id=`, used by the first release of the service.
    ProjectId,
    /// `?game_id=`
    #[default]
    GameId,
}

impl IdParam {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdParam::ProjectId => "project_id",
            IdParam::GameId => "game_id",
        }
    }
}

impl fmt::Display for IdParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the loader needs to know about the outside world, passed in
/// explicitly at construction time.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Base URL of the deck service, without a trailing `/decks`.
    pub host: String,
    pub id_param: IdParam,
    /// Per-list capacity; cards and categories are bounded independently.
    pub capacity: usize,
    /// HTTP timeout. `None` lets a request run until the service answers.
    pub timeout: Option<Duration>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_DECK_HOST.to_string(),
            id_param: IdParam::default(),
            capacity: LIST_ITEM_LIMIT,
            timeout: None,
        }
    }
}
