//! Card values.
//!
//! A `Card` is an immutable `(rank, color)` pair. Two cards are the same
//! card exactly when rank and color match, which is what lets the deck
//! builder deduplicate through a hash set.

use serde::{Deserialize, Serialize};

/// Card color.
///
/// Colors take part in a non-transitive dominance relationship, see
/// [`crate::rules::resolve_round`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Yellow,
    Red,
    Black,
}

impl Color {
    /// All colors, in deck-building order.
    pub const ALL: [Color; 3] = [Color::Yellow, Color::Red, Color::Black];

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Yellow => "yellow",
            Color::Red => "red",
            Color::Black => "black",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single card.
///
/// ```
/// use color_war::cards::{Card, Color};
///
/// let card = Card::new(5, Color::Red);
/// assert_eq!(card.rank(), 5);
/// assert_eq!(card.to_string(), "5 red");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: u8,
    color: Color,
}

impl Card {
    #[must_use]
    pub const fn new(rank: u8, color: Color) -> Self {
        Self { rank, color }
    }

    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.rank, self.color)
    }
}
