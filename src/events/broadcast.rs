//! Signals for the transport layer.
//!
//! Commands do not talk to clients. They return a list of [`Broadcast`]
//! values that the transport fans out to every observer.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::log::EventLogEntry;
use crate::phase::Phase;
use crate::rules::Winner;
use crate::session::LobbySnapshot;

/// A state-change signal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Broadcast {
    /// Full roster + status.
    LobbyUpdate(LobbySnapshot),
    /// The phase changed.
    PhaseChange(Phase),
    /// Full event log after an append.
    EventLog(Vector<EventLogEntry>),
    /// Game over. `None` when the moderator ended the game.
    GameEnded(Option<Winner>),
}

impl Broadcast {
    /// Wire event name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Broadcast::LobbyUpdate(_) => "lobbyUpdate",
            Broadcast::PhaseChange(_) => "phaseChange",
            Broadcast::EventLog(_) => "eventLog",
            Broadcast::GameEnded(_) => "gameEnded",
        }
    }

    /// Encode as a compact binary frame.
    pub fn encode(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Decode a binary frame.
    pub fn decode(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }
}

/// Signals produced by one command.
///
/// Commands emit at most four signals, so this stays inline.
pub type Broadcasts = SmallVec<[Broadcast; 4]>;
