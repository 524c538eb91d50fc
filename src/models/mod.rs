pub mod card;
pub mod deck;
pub mod scalar;

pub use card::*;
pub use deck::*;
pub use scalar::*;
