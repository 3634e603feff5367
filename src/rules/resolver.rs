//! Round resolution: which of two freshly drawn cards wins.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Color};
use crate::core::PlayerId;

/// Winner of a single round, relative to dealing order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundWinner {
    /// The player dealt the first card.
    Player1,
    /// The player dealt the second card.
    Player2,
}

impl RoundWinner {
    /// The seat this winner corresponds to.
    #[must_use]
    pub const fn player(self) -> PlayerId {
        match self {
            RoundWinner::Player1 => PlayerId::FIRST,
            RoundWinner::Player2 => PlayerId::SECOND,
        }
    }
}

impl From<RoundWinner> for PlayerId {
    fn from(winner: RoundWinner) -> Self {
        winner.player()
    }
}

/// Decide a round from the first player's card and the second player's card.
///
/// When colors differ, the second player wins only with yellow against red
/// or black against yellow. Every other pairing of different colors,
/// including red against black in either order, goes to the first player.
/// When colors match, the strictly higher rank wins and equal ranks go to
/// the first player.
///
/// ```
/// use color_war::cards::{Card, Color};
/// use color_war::rules::{resolve_round, RoundWinner};
///
/// let winner = resolve_round(Card::new(5, Color::Red), Card::new(3, Color::Yellow));
/// assert_eq!(winner, RoundWinner::Player2);
/// ```
#[must_use]
pub fn resolve_round(card1: Card, card2: Card) -> RoundWinner {
    if card1.color() != card2.color() {
        match (card1.color(), card2.color()) {
            (Color::Red, Color::Yellow) | (Color::Yellow, Color::Black) => RoundWinner::Player2,
            _ => RoundWinner::Player1,
        }
    } else if card2.rank() > card1.rank() {
        RoundWinner::Player2
    } else {
        RoundWinner::Player1
    }
}
