//! Round resolution and game orchestration.
//!
//! - `resolver`: the pure rule deciding a single round
//! - `engine`: `GameEngine`, which owns the deck and both hands and drives
//!   rounds until the deck runs out

pub mod engine;
pub mod resolver;

pub use engine::{GameEngine, GameOutcome, GamePhase, GameResult, RoundReport};
pub use resolver::{resolve_round, RoundWinner};
