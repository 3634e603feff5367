//! Persistent leaderboard of game winners.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::GameError;

/// Receives the winner of each finished game.
pub trait LeaderboardSink {
    /// Record a winner and the number of cards they finished with.
    fn record_result(&mut self, winner: &str, margin: usize) -> Result<(), GameError>;
}

/// One leaderboard row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub cards: usize,
}

/// Leaderboard kept sorted by `cards`, highest first.
///
/// Entries with equal scores keep their insertion order. When created with
/// [`Leaderboard::load`], every recorded result is written back to the same
/// file immediately.
#[derive(Clone, Debug, Default)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
    path: Option<PathBuf>,
}

impl Leaderboard {
    /// In-memory leaderboard with no backing file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from existing entries, re-sorting them.
    pub fn from_entries(entries: impl IntoIterator<Item = LeaderboardEntry>) -> Self {
        let mut board = Self {
            entries: entries.into_iter().collect(),
            path: None,
        };
        board.sort();
        board
    }

    /// Load from `path`. A missing file yields an empty board bound to
    /// that path.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, GameError> {
        let path = path.into();
        let entries: Vec<LeaderboardEntry> = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(err.into()),
        };
        debug!(path = %path.display(), count = entries.len(), "loaded leaderboard");

        let mut board = Self::from_entries(entries);
        board.path = Some(path);
        Ok(board)
    }

    /// Write entries as pretty JSON to `path`.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), GameError> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Write entries to the backing file, if any.
    pub fn save(&self) -> Result<(), GameError> {
        match &self.path {
            Some(path) => self.save_to(path),
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[must_use]
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// The best `n` entries.
    #[must_use]
    pub fn top(&self, n: usize) -> &[LeaderboardEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn sort(&mut self) {
        // stable: equal scores keep insertion order
        self.entries.sort_by(|a, b| b.cards.cmp(&a.cards));
    }
}

impl LeaderboardSink for Leaderboard {
    fn record_result(&mut self, winner: &str, margin: usize) -> Result<(), GameError> {
        self.entries.push(LeaderboardEntry {
            name: winner.to_owned(),
            cards: margin,
        });
        self.sort();
        self.save()
    }
}

impl LeaderboardSink for Vec<LeaderboardEntry> {
    fn record_result(&mut self, winner: &str, margin: usize) -> Result<(), GameError> {
        self.push(LeaderboardEntry {
            name: winner.to_owned(),
            cards: margin,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, cards: usize) -> LeaderboardEntry {
        LeaderboardEntry {
            name: name.into(),
            cards,
        }
    }

    #[test]
    fn test_record_keeps_descending_order() {
        let mut board = Leaderboard::new();
        board.record_result("ada", 18).unwrap();
        board.record_result("bob", 24).unwrap();
        board.record_result("cy", 20).unwrap();

        let names: Vec<_> = board.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["bob", "cy", "ada"]);
    }

    #[test]
    fn test_equal_scores_keep_insertion_order() {
        let mut board = Leaderboard::from_entries([entry("ada", 20)]);
        board.record_result("bob", 20).unwrap();
        assert_eq!(board.entries(), &[entry("ada", 20), entry("bob", 20)]);
    }

    #[test]
    fn test_from_entries_sorts() {
        let board = Leaderboard::from_entries([entry("a", 1), entry("b", 3), entry("c", 2)]);
        assert_eq!(board.top(2), &[entry("b", 3), entry("c", 2)]);
        assert_eq!(board.top(10).len(), 3);
        assert!(board.path().is_none());
    }

    #[test]
    fn test_vec_sink() {
        let mut rows: Vec<LeaderboardEntry> = Vec::new();
        rows.record_result("ada", 3).unwrap();
        assert_eq!(rows, vec![entry("ada", 3)]);
    }
}
