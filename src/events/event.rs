//! Game event types.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;
use crate::rules::GameOutcome;

/// Something that happened during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// One or both players failed the authorization check.
    Rejected { names: Vec<String> },

    /// The deck was built and play begins.
    GameStarted { deck_size: usize, seed: u64 },

    /// A player was dealt a card from the deck.
    CardDrawn { player: PlayerId, card: Card },

    /// A round was decided and the losing card changed hands.
    RoundResolved {
        round: u32,
        winner: PlayerId,
        moved: Card,
    },

    /// The deck ran out.
    GameFinished { outcome: GameOutcome },
}

impl GameEvent {
    /// Events a results-only view still shows.
    #[must_use]
    pub fn is_summary(&self) -> bool {
        matches!(
            self,
            GameEvent::Rejected { .. } | GameEvent::GameStarted { .. } | GameEvent::GameFinished { .. }
        )
    }
}
