//! Error type shared by the engine, game modes and stores.

use thiserror::Error;

use super::player::PlayerId;
use crate::rules::GamePhase;

/// Error type for game operations.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("not authorized to play: {}", .names.join(", "))]
    Unauthorized { names: Vec<String> },
    #[error("deck of {requested} unique cards requested but only {available} combinations exist")]
    Capacity { requested: usize, available: usize },
    #[error("deck holds fewer than two cards")]
    DeckExhausted,
    #[error("{0} has no card to give up")]
    EmptyHand(PlayerId),
    #[error("no contested round to settle")]
    NoContestedRound,
    #[error("round already drawn and not yet settled")]
    UnsettledRound,
    #[error("invalid phase: expected {expected}, got {actual}")]
    InvalidPhase {
        expected: GamePhase,
        actual: GamePhase,
    },
    #[error("game mode not implemented: {0}")]
    NotImplemented(&'static str),
    #[error("unknown game mode: {0}")]
    UnknownMode(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
