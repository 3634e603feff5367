//! Game configuration types.
//!
//! Callers configure a game at startup by providing:
//! - `DeckConfig`: Deck size and the rank/color space cards are drawn from
//! - `ScoringPolicy`: How the overall winner is decided
//! - `GameConfig`: Combines all configuration, plus an optional seed
//!
//! All types derive serde so a config can be stored as JSON.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::cards::Color;

/// Default number of cards in a freshly built deck.
pub const DEFAULT_DECK_SIZE: usize = 30;

/// Lowest rank a card can carry by default.
pub const DEFAULT_MIN_RANK: u8 = 1;

/// Highest rank a card can carry by default.
pub const DEFAULT_MAX_RANK: u8 = 10;

/// How the overall winner is picked once the deck runs out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringPolicy {
    /// The player holding strictly more cards wins. Equal counts are a draw.
    #[default]
    CardCount,
    /// The winner of the last resolved round wins the game.
    LastRound,
}

impl std::fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoringPolicy::CardCount => write!(f, "card-count"),
            ScoringPolicy::LastRound => write!(f, "last-round"),
        }
    }
}

/// Shape of the deck: how many cards and which values they may take.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Number of unique cards to draw.
    pub size: usize,

    /// Lowest rank (inclusive).
    pub min_rank: u8,

    /// Highest rank (inclusive).
    pub max_rank: u8,

    /// Colors cards are drawn from. Duplicates are ignored when computing
    /// capacity.
    pub colors: SmallVec<[Color; 3]>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_DECK_SIZE,
            min_rank: DEFAULT_MIN_RANK,
            max_rank: DEFAULT_MAX_RANK,
            colors: smallvec![Color::Yellow, Color::Red, Color::Black],
        }
    }
}

impl DeckConfig {
    /// Set the deck size.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the inclusive rank range.
    #[must_use]
    pub fn with_ranks(mut self, min_rank: u8, max_rank: u8) -> Self {
        self.min_rank = min_rank;
        self.max_rank = max_rank;
        self
    }

    /// Replace the color set.
    #[must_use]
    pub fn with_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.colors = colors.into_iter().collect();
        self
    }

    /// Number of ranks in the configured range (0 if inverted).
    #[must_use]
    pub fn rank_count(&self) -> usize {
        if self.min_rank > self.max_rank {
            0
        } else {
            usize::from(self.max_rank - self.min_rank) + 1
        }
    }

    /// Distinct colors in the configured set.
    #[must_use]
    pub fn distinct_colors(&self) -> SmallVec<[Color; 3]> {
        let mut distinct: SmallVec<[Color; 3]> = SmallVec::new();
        for &color in &self.colors {
            if !distinct.contains(&color) {
                distinct.push(color);
            }
        }
        distinct
    }

    /// Number of distinct (rank, color) combinations available.
    ///
    /// ```
    /// use color_war::core::DeckConfig;
    ///
    /// assert_eq!(DeckConfig::default().capacity(), 30);
    /// ```
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.rank_count() * self.distinct_colors().len()
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub deck: DeckConfig,

    #[serde(default)]
    pub scoring: ScoringPolicy,

    /// Deck seed. `None` draws one from entropy when the game starts.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a config with default deck and scoring.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the deck configuration.
    #[must_use]
    pub fn with_deck(mut self, deck: DeckConfig) -> Self {
        self.deck = deck;
        self
    }

    /// Set only the deck size.
    #[must_use]
    pub fn with_deck_size(mut self, size: usize) -> Self {
        self.deck.size = size;
        self
    }

    /// Set the scoring policy.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringPolicy) -> Self {
        self.scoring = scoring;
        self
    }

    /// Fix the deck seed for reproducible games.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
