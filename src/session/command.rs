//! Commands, replies, and dispatch results.
//!
//! Commands are an internally tagged union, so a transport can decode a
//! JSON payload straight into a validated command:
//!
//! ```
//! use werwolf_engine::session::Command;
//!
//! let command: Command = serde_json::from_str(r#"{"command":"register","name":"Anna"}"#).unwrap();
//! assert_eq!(command, Command::Register { name: "Anna".into() });
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};

use super::LobbySnapshot;
use crate::actions::WitchPotion;
use crate::core::{Player, Role};
use crate::events::{Broadcast, Broadcasts, EventLogEntry};

/// A command from a client or moderator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum Command {
    /// Join the lobby.
    Register { name: String },
    /// Query roster + status.
    GetLobby,
    /// Deal the given role names and start the first night.
    StartGame { roles: Vec<String> },
    /// Advance the phase and check for a winner.
    NextPhase,
    /// Night kill.
    WerewolfVote { target: String },
    /// Inspect a role.
    SeerCheck { target: String },
    /// Use a witch potion.
    WitchAction {
        action: WitchPotion,
        #[serde(alias = "targetName")]
        target: String,
    },
    /// Day lynch.
    Vote { target: String },
    /// Query the event log.
    GetEventLog,
    /// Kill a player regardless of phase.
    ModeratorKill { target: String },
    /// Leave the lobby.
    RemovePlayer { name: String },
    /// Give the mayor flag to one player.
    SetMayor { name: String },
    /// Flip a player's alive flag.
    ToggleAlive { name: String },
    /// Toggle between night and day without a win check.
    ModeratorSwitchPhase,
    /// Reset to the lobby, keeping the roster.
    EndGame,
}

impl Command {
    /// Wire name of the command.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Command::Register { .. } => "register",
            Command::GetLobby => "getLobby",
            Command::StartGame { .. } => "startGame",
            Command::NextPhase => "nextPhase",
            Command::WerewolfVote { .. } => "werewolfVote",
            Command::SeerCheck { .. } => "seerCheck",
            Command::WitchAction { .. } => "witchAction",
            Command::Vote { .. } => "vote",
            Command::GetEventLog => "getEventLog",
            Command::ModeratorKill { .. } => "moderatorKill",
            Command::RemovePlayer { .. } => "removePlayer",
            Command::SetMayor { .. } => "setMayor",
            Command::ToggleAlive { .. } => "toggleAlive",
            Command::ModeratorSwitchPhase => "moderatorSwitchPhase",
            Command::EndGame => "endGame",
        }
    }

    /// Check if the command can change state.
    #[must_use]
    pub const fn is_query(&self) -> bool {
        matches!(self, Command::GetLobby | Command::GetEventLog)
    }
}

/// Synchronous answer to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reply {
    /// Nothing to report (the command may still broadcast).
    None,
    /// Success acknowledgement.
    Ack,
    /// The registered player.
    Player(Player),
    /// Roster + status.
    Lobby(LobbySnapshot),
    /// The inspected role (`None` before dealing).
    Role(Option<Role>),
    /// Event log, oldest first.
    EventLog(Vector<EventLogEntry>),
}

/// Result of a successful command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dispatch {
    /// Answer for the caller.
    pub reply: Reply,
    /// Signals for every observer.
    pub broadcasts: Broadcasts,
}

impl Dispatch {
    /// Reply with no broadcasts.
    #[must_use]
    pub fn reply(reply: Reply) -> Self {
        Self {
            reply,
            broadcasts: Broadcasts::new(),
        }
    }

    /// An ignored command: no reply, no broadcasts.
    #[must_use]
    pub fn ignored() -> Self {
        Self::reply(Reply::None)
    }

    /// Check if anything must be broadcast.
    #[must_use]
    pub fn changed(&self) -> bool {
        !self.broadcasts.is_empty()
    }

    /// Find the first broadcast with the given wire name.
    #[must_use]
    pub fn broadcast(&self, name: &str) -> Option<&Broadcast> {
        self.broadcasts.iter().find(|b| b.name() == name)
    }
}
