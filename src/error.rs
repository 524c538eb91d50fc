#[derive(Debug, thiserror::Error)]
pub enum DecksError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Category position {position} is out of range (card has {len} categories)")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, DecksError>;
