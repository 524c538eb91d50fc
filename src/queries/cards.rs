//! Name, category listing, positional lookup and comparison of cards.
//!
//! Positions are 1-based indexes into a card's category values sorted by
//! ascending numeric category id. That ordering is recomputed on every call;
//! cards are never mutated.

use std::fmt;

use crate::error::{DecksError, Result};
use crate::models::{Card, CategoryValue, Identifier, StatValue};

// ---------------------------------------------------------------------------
// CategorySelector
// ---------------------------------------------------------------------------

/// Which category of a card a comparison reads.
#[derive(Debug, Clone, PartialEq)]
pub enum CategorySelector {
    /// 1-based position in the canonical ordering.
    ByPosition(usize),
    /// The category value whose id matches, wherever it sits in the card.
    ByCategoryId(Identifier),
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategorySelector::ByPosition(p) => write!(f, "position {}", p),
            CategorySelector::ByCategoryId(id) => write!(f, "category id {}", id),
        }
    }
}

/// Sort a card's category values ascending by numeric category id.
///
/// The sort is stable, so repeated calls give the same sequence even if two
/// ids were ever equal. Fails if any id is not numeric.
pub fn ordered_category_values(card: &Card) -> Result<Vec<&CategoryValue>> {
    let mut keyed = card
        .category_values
        .iter()
        .map(|cv| Ok((cv.category_id.as_f64()?, cv)))
        .collect::<Result<Vec<_>>>()?;
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    Ok(keyed.into_iter().map(|(_, cv)| cv).collect())
}

// ---------------------------------------------------------------------------
// CardQuery
// ---------------------------------------------------------------------------

/// Read-only queries against a single card.
#[derive(Debug, Clone, Copy)]
pub struct CardQuery<'a> {
    card: &'a Card,
}

impl<'a> CardQuery<'a> {
    pub fn new(card: &'a Card) -> Self {
        Self { card }
    }

    pub fn card(&self) -> &'a Card {
        self.card
    }

    /// Category values in canonical order. See [`ordered_category_values`].
    pub fn ordered_category_values(&self) -> Result<Vec<&'a CategoryValue>> {
        ordered_category_values(self.card)
    }

    /// Display identifier of the card, `card-<id>-<name>`.
    pub fn name(&self) -> String {
        format!("card-{}-{}", self.card.id, self.card.name)
    }

    /// The card's name exactly as the service sent it.
    pub fn bare_name(&self) -> &'a str {
        &self.card.name
    }

    /// Multi-line listing of the card's categories:
    ///
    /// ```text
    ///
    /// card-1-Fox
    /// 1-Speed:10
    /// 2-Stealth:5
    ///
    /// ```
    ///
    /// A category value without a name renders as `<position>-:<value>`.
    pub fn categories_report(&self) -> Result<String> {
        let mut lines = vec![String::new(), self.name()];
        for (i, cv) in self.ordered_category_values()?.into_iter().enumerate() {
            lines.push(format!(
                "{}-{}:{}",
                i + 1,
                cv.category_name.as_deref().unwrap_or(""),
                cv.value
            ));
        }
        lines.push(String::new());
        Ok(lines.join("\n"))
    }

    /// One `<categoryId>-<categoryName>:<value>` line per category value, in
    /// the order the card stores them, with no header or blank lines.
    pub fn legacy_categories_report(&self) -> String {
        self.card
            .category_values
            .iter()
            .map(|cv| {
                format!(
                    "{}-{}:{}",
                    cv.category_id,
                    cv.category_name.as_deref().unwrap_or(""),
                    cv.value
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Value of the category at 1-based `position` in canonical order.
    pub fn category_value(&self, position: usize) -> Result<&'a StatValue> {
        let ordered = self.ordered_category_values()?;
        position
            .checked_sub(1)
            .and_then(|idx| ordered.get(idx).copied())
            .map(|cv| &cv.value)
            .ok_or(DecksError::PositionOutOfRange {
                position,
                len: ordered.len(),
            })
    }

    /// Value of the category with a matching id.
    pub fn value_by_category_id(&self, category_id: &Identifier) -> Result<&'a StatValue> {
        self.card
            .category_values
            .iter()
            .find(|cv| cv.category_id.matches(category_id))
            .map(|cv| &cv.value)
            .ok_or_else(|| {
                DecksError::CategoryNotFound(format!(
                    "card '{}' has no category with id {}",
                    self.card.name, category_id
                ))
            })
    }

    pub fn value(&self, selector: &CategorySelector) -> Result<&'a StatValue> {
        match selector {
            CategorySelector::ByPosition(position) => self.category_value(*position),
            CategorySelector::ByCategoryId(id) => self.value_by_category_id(id),
        }
    }

    /// Selected value parsed as a number.
    pub fn numeric_value(&self, selector: &CategorySelector) -> Result<f64> {
        self.value(selector)?.as_f64()
    }
}

/// `value(card1) - value(card2)` on the selected category.
///
/// Negative means `card1` is lower, zero equal, positive higher.
pub fn compare_cards_on_category(
    card1: &Card,
    card2: &Card,
    selector: &CategorySelector,
) -> Result<f64> {
    let v1 = CardQuery::new(card1).numeric_value(selector)?;
    let v2 = CardQuery::new(card2).numeric_value(selector)?;
    Ok(v1 - v2)
}
