//! Core engine types: players, RNG, configuration, errors.
//!
//! These are the leaf building blocks shared by the card, rules and store
//! modules.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{DeckConfig, GameConfig, ScoringPolicy, DEFAULT_DECK_SIZE};
pub use error::GameError;
pub use player::{Player, PlayerId, Players};
pub use rng::GameRng;
