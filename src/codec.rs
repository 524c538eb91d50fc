//! The string boundary between this crate and the host.
//!
//! Host lists and block arguments are text only, so cards and categories
//! cross it as JSON, numbers as decimal text, and the shuffle switch as the
//! literal `"True"`.

use crate::error::{DecksError, Result};
use crate::models::{Card, Category};

/// Serialize a card to the text stored in a host list.
pub fn encode_card(card: &Card) -> Result<String> {
    Ok(serde_json::to_string(card)?)
}

/// Parse a card previously stored with [`encode_card`] (or sent by the service).
pub fn decode_card(text: &str) -> Result<Card> {
    Ok(serde_json::from_str(text)?)
}

pub fn encode_category(category: &Category) -> Result<String> {
    Ok(serde_json::to_string(category)?)
}

pub fn decode_category(text: &str) -> Result<Category> {
    Ok(serde_json::from_str(text)?)
}

// ---------------------------------------------------------------------------
// ShuffleFlag
// ---------------------------------------------------------------------------

/// Whether the loader permutes the cards before storing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShuffleFlag {
    Shuffle,
    #[default]
    KeepOrder,
}

impl ShuffleFlag {
    /// Read the block argument. Only the exact text `"True"` enables shuffling.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "True" {
            ShuffleFlag::Shuffle
        } else {
            ShuffleFlag::KeepOrder
        }
    }

    pub fn is_shuffle(&self) -> bool {
        matches!(self, ShuffleFlag::Shuffle)
    }
}

impl From<bool> for ShuffleFlag {
    fn from(shuffle: bool) -> Self {
        if shuffle {
            ShuffleFlag::Shuffle
        } else {
            ShuffleFlag::KeepOrder
        }
    }
}

// ---------------------------------------------------------------------------
// Numeric arguments
// ---------------------------------------------------------------------------

/// Read a whole number from block text; `"12"`, `" 12 "` and `"12.0"` all give 12.
fn parse_whole_number(arg: &str, what: &str) -> Result<f64> {
    let trimmed = arg.trim();
    let value = trimmed.parse::<f64>().map_err(|_| {
        DecksError::InvalidArgument(format!("{} '{}' is not a number", what, arg))
    })?;
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(DecksError::InvalidArgument(format!(
            "{} '{}' is not a whole number",
            what, arg
        )));
    }
    Ok(value)
}

/// Parse the project/game id argument of the load block.
pub fn parse_project_id(arg: &str) -> Result<i64> {
    let value = parse_whole_number(arg, "project id")?;
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(DecksError::InvalidArgument(format!(
            "project id '{}' is out of range",
            arg
        )));
    }
    Ok(value as i64)
}

/// Parse a 1-based category position.
pub fn parse_position(arg: &str) -> Result<usize> {
    let value = parse_whole_number(arg, "category position")?;
    if value < 1.0 {
        return Err(DecksError::InvalidArgument(format!(
            "category position '{}' must be 1 or greater",
            arg
        )));
    }
    Ok(value as usize)
}

/// Validate the destination list name of the load block.
pub fn parse_list_name(arg: &str) -> Result<&str> {
    if arg.is_empty() {
        return Err(DecksError::InvalidArgument(
            "list name must not be empty".to_string(),
        ));
    }
    Ok(arg)
}
