//! A player's hand.

use serde::{Deserialize, Serialize};

use super::card::Card;

/// Ordered cards held by one player.
///
/// Only two mutations exist: append a card (dealt or won) and take back the
/// most recently appended card (lost). A hand therefore never gives up a
/// card other than the one it was just dealt.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove and return the most recently appended card.
    pub fn pop_last(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// The most recently appended card.
    #[must_use]
    pub fn last(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}
