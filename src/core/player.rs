//! Player seats and per-seat data.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. A color war game always has exactly two
//! seats: `PlayerId::FIRST` receives the first card of every round,
//! `PlayerId::SECOND` the next one.
//!
//! ## Player
//!
//! A named participant holding a [`Hand`].

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::cards::Hand;

/// Seat identifier for one of the two players.
///
/// Seat indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player dealt the first card of each round.
    pub const FIRST: PlayerId = PlayerId(0);

    /// The player dealt the second card of each round.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> PlayerId {
        PlayerId(1 - self.0)
    }

    /// Both seats in dealing order.
    ///
    /// ```
    /// use color_war::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::both().collect();
    /// assert_eq!(seats, vec![PlayerId::FIRST, PlayerId::SECOND]);
    /// ```
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [PlayerId::FIRST, PlayerId::SECOND].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// A named player and the cards they currently hold.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Name as supplied by the caller, checked against the allow-list.
    pub name: String,

    pub hand: Hand,
}

impl Player {
    /// Create a player with an empty hand.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
        }
    }

    /// Number of cards held.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len()
    }
}

/// Both players of a game, indexable by `PlayerId`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    seats: [Player; 2],
}

impl Players {
    /// Seat `first` as `PlayerId::FIRST` and `second` as `PlayerId::SECOND`.
    pub fn new(first: Player, second: Player) -> Self {
        Self {
            seats: [first, second],
        }
    }

    /// Iterate over (PlayerId, &Player) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        PlayerId::both().zip(self.seats.iter())
    }

    /// Card counts of both seats, in seat order.
    #[must_use]
    pub fn card_counts(&self) -> [usize; 2] {
        [self.seats[0].card_count(), self.seats[1].card_count()]
    }

    /// Total cards held across both hands.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.seats.iter().map(Player::card_count).sum()
    }

    /// Mutable access to both players at once, `(player, opponent)`.
    pub fn pair_mut(&mut self, player: PlayerId) -> (&mut Player, &mut Player) {
        let [first, second] = &mut self.seats;
        if player == PlayerId::FIRST {
            (first, second)
        } else {
            (second, first)
        }
    }
}

impl Index<PlayerId> for Players {
    type Output = Player;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.seats[player.index()]
    }
}

impl IndexMut<PlayerId> for Players {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.seats[player.index()]
    }
}
