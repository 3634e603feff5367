//! # color-war
//!
//! A two-player card comparison game engine.
//!
//! Both players are dealt one card per round from a shared deck of unique
//! `(rank, color)` cards. A fixed rule decides the round and the winner takes
//! the loser's card. When the deck runs out, the scoring policy names the
//! overall winner.
//!
//! ## Design Principles
//!
//! 1. **No hidden state**: A `GameEngine` owns its deck and both hands.
//!    Nothing survives between games.
//!
//! 2. **Deterministic**: Decks come from a seeded ChaCha8 RNG, so any game
//!    can be replayed from its seed.
//!
//! 3. **Conservation**: Deck plus both hands always hold exactly the cards
//!    the deck was built with.
//!
//! 4. **Structured output**: The engine emits `GameEvent`s, never text.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, errors
//! - `cards`: Card values, deck, hands
//! - `rules`: Round resolution and the game engine
//! - `events`: Event types and sinks
//! - `store`: Authorization and leaderboard collaborators
//! - `modes`: Fast / normal / slow play

pub mod cards;
pub mod core;
pub mod events;
pub mod modes;
pub mod rules;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    DeckConfig, GameConfig, GameError, GameRng, Player, PlayerId, Players,
    ScoringPolicy,
};

pub use crate::cards::{Card, Color, Deck, Hand};

pub use crate::rules::{
    resolve_round, GameEngine, GameOutcome, GamePhase, GameResult, RoundReport, RoundWinner,
};

pub use crate::events::{EventLog, EventSink, GameEvent, NullSink};

pub use crate::store::{AuthorizedPlayers, Authorizer, Leaderboard, LeaderboardEntry, LeaderboardSink};

pub use crate::modes::GameMode;
