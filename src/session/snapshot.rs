//! Observable roster + status.

use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::phase::GameStatus;

/// Everything an observer sees in a lobby update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LobbySnapshot {
    /// Players in registration order.
    pub players: Vec<Player>,
    /// Game status.
    #[serde(rename = "gameStatus")]
    pub status: GameStatus,
}

impl LobbySnapshot {
    /// Names in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.players.iter().map(|p| p.name.as_str()).collect()
    }

    /// Find a player by name.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }
}
