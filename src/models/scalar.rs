use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DecksError, Result};

// ---------------------------------------------------------------------------
// Identifier — card and category ids, sent as numbers or numeric strings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Number(serde_json::Number),
    Text(String),
}

impl Identifier {
    /// Numeric reading of the id, used for canonical ordering.
    pub fn as_f64(&self) -> Result<f64> {
        let parsed = match self {
            Identifier::Number(n) => n.as_f64(),
            Identifier::Text(s) => s.trim().parse::<f64>().ok(),
        };
        match parsed {
            Some(v) if v.is_finite() => Ok(v),
            _ => Err(DecksError::InvalidValue(format!("id '{}' is not numeric", self))),
        }
    }

    /// Loose id equality: `2` matches `"2"` and `"2.0"`; non-numeric ids
    /// fall back to comparing their text.
    pub fn matches(&self, other: &Identifier) -> bool {
        match (self.as_f64(), other.as_f64()) {
            (Ok(a), Ok(b)) => a == b,
            _ => self.to_string() == other.to_string(),
        }
    }

    /// Total order on the numeric reading. Fails if either side is not a number.
    pub fn numeric_cmp(&self, other: &Identifier) -> Result<Ordering> {
        Ok(self.as_f64()?.total_cmp(&other.as_f64()?))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Number(n) => write!(f, "{}", n),
            Identifier::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Identifier {
    fn from(v: i64) -> Self {
        Identifier::Number(v.into())
    }
}

impl From<&str> for Identifier {
    fn from(v: &str) -> Self {
        Identifier::Text(v.to_string())
    }
}

// ---------------------------------------------------------------------------
// StatValue — a card's value for one category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(serde_json::Number),
    Text(String),
}

impl StatValue {
    /// Parse the value as floating point; integers and fractions are both accepted.
    pub fn as_f64(&self) -> Result<f64> {
        let parsed = match self {
            StatValue::Number(n) => n.as_f64(),
            StatValue::Text(s) => s.trim().parse::<f64>().ok(),
        };
        match parsed {
            Some(v) if v.is_finite() => Ok(v),
            _ => Err(DecksError::InvalidValue(format!(
                "category value '{}' is not a number",
                self
            ))),
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Number(n) => write!(f, "{}", n),
            StatValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for StatValue {
    fn from(v: &str) -> Self {
        StatValue::Text(v.to_string())
    }
}
