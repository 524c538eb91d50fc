//! Card Query Engine.
//!
//! Pure functions over already-decoded [`Card`](crate::models::Card)s: no I/O,
//! no shared state, safe to call from any thread.

pub mod cards;

pub use cards::{compare_cards_on_category, ordered_category_values, CardQuery, CategorySelector};
