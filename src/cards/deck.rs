//! The shared deck.
//!
//! A `Deck` is built once per game by rejection sampling: draw a random
//! `(rank, color)` pair, keep it if it has not been seen yet, repeat until
//! the requested size is reached. Cards are dealt from the front, in the
//! order they were sampled.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::config::DeckConfig;
use crate::core::error::GameError;
use crate::core::rng::GameRng;

/// Ordered collection of unique cards, drawn from the front.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Build a deck of `config.size` unique cards.
    ///
    /// Fails with [`GameError::Capacity`] when the rank/color space holds
    /// fewer than `config.size` distinct cards. Nothing is sampled in that
    /// case.
    ///
    /// ```
    /// use color_war::cards::Deck;
    /// use color_war::core::{DeckConfig, GameRng};
    ///
    /// let mut rng = GameRng::new(42);
    /// let deck = Deck::build(&DeckConfig::default(), &mut rng).unwrap();
    /// assert_eq!(deck.len(), 30);
    ///
    /// let too_big = DeckConfig::default().with_size(31);
    /// assert!(Deck::build(&too_big, &mut rng).is_err());
    /// ```
    pub fn build(config: &DeckConfig, rng: &mut GameRng) -> Result<Self, GameError> {
        let available = config.capacity();
        if config.size > available {
            return Err(GameError::Capacity {
                requested: config.size,
                available,
            });
        }

        let colors = config.distinct_colors();
        let mut seen = FxHashSet::default();
        let mut cards = VecDeque::with_capacity(config.size);

        while cards.len() < config.size {
            let rank = rng.gen_range_u8(config.min_rank..=config.max_rank);
            // capacity > 0 here, so colors is non-empty
            let Some(&color) = rng.choose(&colors) else {
                break;
            };
            let card = Card::new(rank, color);
            if seen.insert(card) {
                cards.push_back(card);
            }
        }

        Ok(Self { cards })
    }

    /// Build a deck with a fixed card order.
    ///
    /// Panics if `cards` contains duplicates.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let cards: VecDeque<Card> = cards.into_iter().collect();
        let mut seen = FxHashSet::default();
        assert!(
            cards.iter().all(|card| seen.insert(*card)),
            "Deck cards must be unique"
        );
        Self { cards }
    }

    /// Remove and return the front card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;

    #[test]
    fn test_build_default_exhausts_space() {
        let mut rng = GameRng::new(42);
        let deck = Deck::build(&DeckConfig::default(), &mut rng).unwrap();

        assert_eq!(deck.len(), 30);
        let unique: FxHashSet<_> = deck.iter().copied().collect();
        assert_eq!(unique.len(), 30);

        for rank in 1..=10 {
            for color in Color::ALL {
                assert!(unique.contains(&Card::new(rank, color)));
            }
        }
    }

    #[test]
    fn test_build_over_capacity() {
        let mut rng = GameRng::new(42);
        let err = Deck::build(&DeckConfig::default().with_size(31), &mut rng).unwrap_err();

        match err {
            GameError::Capacity {
                requested,
                available,
            } => {
                assert_eq!(requested, 31);
                assert_eq!(available, 30);
            }
            other => panic!("Unexpected error: {other}"),
        }
    }

    #[test]
    fn test_build_empty_space() {
        let mut rng = GameRng::new(1);
        let config = DeckConfig::default().with_colors(std::iter::empty()).with_size(1);
        assert!(Deck::build(&config, &mut rng).is_err());

        let config = DeckConfig::default().with_colors(std::iter::empty()).with_size(0);
        assert!(Deck::build(&config, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_build_respects_ranges() {
        let mut rng = GameRng::new(3);
        let config = DeckConfig::default()
            .with_ranks(4, 6)
            .with_colors([Color::Red, Color::Black])
            .with_size(6);
        let deck = Deck::build(&config, &mut rng).unwrap();

        assert_eq!(deck.len(), 6);
        for card in deck.iter() {
            assert!((4..=6).contains(&card.rank()));
            assert_ne!(card.color(), Color::Yellow);
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        let config = DeckConfig::default().with_size(12);
        let a = Deck::build(&config, &mut GameRng::new(9)).unwrap();
        let b = Deck::build(&config, &mut GameRng::new(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_draw_from_front() {
        let mut deck = Deck::from_cards([
            Card::new(1, Color::Red),
            Card::new(2, Color::Red),
        ]);

        assert_eq!(deck.draw(), Some(Card::new(1, Color::Red)));
        assert_eq!(deck.draw(), Some(Card::new(2, Color::Red)));
        assert_eq!(deck.draw(), None);
        assert!(deck.is_empty());
    }

    #[test]
    #[should_panic(expected = "Deck cards must be unique")]
    fn test_from_cards_rejects_duplicates() {
        Deck::from_cards([Card::new(1, Color::Red), Card::new(1, Color::Red)]);
    }
}
