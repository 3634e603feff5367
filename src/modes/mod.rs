//! Game modes.
//!
//! A mode decides how much of a game the presentation layer gets to see.
//! Every mode plays through the same [`GameEngine`]; only the event stream
//! differs.
//!
//! - `fast`: start, rejection and final result only
//! - `normal`: every card drawn and every round
//! - `slow`: reserved, always fails with [`GameError::NotImplemented`]

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::GameError;
use crate::events::{EventSink, GameEvent};
use crate::rules::{GameEngine, GameOutcome};
use crate::store::{Authorizer, LeaderboardSink};

/// Selectable game mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Fast,
    #[default]
    Normal,
    Slow,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::Fast, GameMode::Normal, GameMode::Slow];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GameMode::Fast => "fast",
            GameMode::Normal => "normal",
            GameMode::Slow => "slow",
        }
    }

    /// Play `engine` to completion under this mode.
    ///
    /// When `leaderboard` is given, a decisive result is recorded on it
    /// once the game finishes.
    pub fn play(
        self,
        engine: &mut GameEngine,
        authorizer: &dyn Authorizer,
        sink: &mut dyn EventSink,
        leaderboard: Option<&mut dyn LeaderboardSink>,
    ) -> Result<GameOutcome, GameError> {
        info!(mode = self.name(), "playing");
        let outcome = match self {
            GameMode::Fast => engine.run(authorizer, &mut SummaryOnly(sink))?,
            GameMode::Normal => engine.run(authorizer, sink)?,
            GameMode::Slow => return Err(GameError::NotImplemented("slow")),
        };

        if let Some(board) = leaderboard {
            engine.record_result(board)?;
        }
        Ok(outcome)
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameMode {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        GameMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GameError::UnknownMode(s.to_owned()))
    }
}

/// Forwards only summary events to the wrapped sink.
struct SummaryOnly<'a>(&'a mut dyn EventSink);

impl EventSink for SummaryOnly<'_> {
    fn emit(&mut self, event: &GameEvent) {
        if event.is_summary() {
            self.0.emit(event);
        }
    }
}
