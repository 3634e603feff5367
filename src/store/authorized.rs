//! Player authorization.

use std::path::Path;

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::core::GameError;

/// Decides whether a player name may play.
pub trait Authorizer {
    fn is_authorized(&self, name: &str) -> bool;
}

impl<F> Authorizer for F
where
    F: Fn(&str) -> bool,
{
    fn is_authorized(&self, name: &str) -> bool {
        self(name)
    }
}

/// Allow-list of player names, matched case-insensitively.
///
/// Names are stored uppercased. Surrounding whitespace is ignored on both
/// sides of the comparison.
///
/// ## Example
///
/// ```
/// use color_war::store::{AuthorizedPlayers, Authorizer};
///
/// let players = AuthorizedPlayers::from_json(r#"["ADA", "BOB"]"#).unwrap();
/// assert!(players.is_authorized("ada"));
/// assert!(players.is_authorized(" Bob "));
/// assert!(!players.is_authorized("eve"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct AuthorizedPlayers {
    names: FxHashSet<String>,
}

fn normalize(name: &str) -> String {
    name.trim().to_uppercase()
}

impl AuthorizedPlayers {
    /// Build from an iterator of names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names.into_iter().map(|n| normalize(n.as_ref())).collect(),
        }
    }

    /// Parse a JSON array of names.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let names: Vec<String> = serde_json::from_str(json)?;
        Ok(Self::from_names(names))
    }

    /// Load a JSON array of names from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let players = Self::from_json(&contents)?;
        debug!(path = %path.display(), count = players.len(), "loaded authorized players");
        Ok(players)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Authorizer for AuthorizedPlayers {
    fn is_authorized(&self, name: &str) -> bool {
        self.names.contains(&normalize(name))
    }
}
