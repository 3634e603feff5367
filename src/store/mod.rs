//! External collaborators: who may play, and who has won.
//!
//! Both are traits so the engine never depends on where the data lives.
//! The bundled implementations are backed by small JSON files:
//!
//! - `authorized_players.json`: `["ADA", "BOB"]`
//! - `leaderboard.json`: `[{"name": "ada", "cards": 22}, ...]`, highest first

pub mod authorized;
pub mod leaderboard;

pub use authorized::{AuthorizedPlayers, Authorizer};
pub use leaderboard::{Leaderboard, LeaderboardEntry, LeaderboardSink};
