//! Card system: card values, the shared deck, and player hands.
//!
//! ## Key Types
//!
//! - `Color`: One of yellow, red, black
//! - `Card`: Immutable `(rank, color)` value
//! - `Deck`: Unique cards dealt from the front
//! - `Hand`: Cards held by one player, last-in first-out for losses

pub mod card;
pub mod deck;
pub mod hand;

pub use card::{Card, Color};
pub use deck::Deck;
pub use hand::Hand;
