//! Command boundary: the game session and its dispatcher.
//!
//! ## Key Types
//!
//! - [`GameSession`]: owns roster, phase machine, event log, and RNG
//! - [`Command`]: decoded client/moderator command
//! - [`Dispatch`]: reply for the caller plus broadcasts for observers
//! - [`SharedSession`]: mutex handle for multi-threaded hosts
//!
//! ## Broadcast rules
//!
//! - every successful mutation yields `LobbyUpdate`
//! - phase transitions add `PhaseChange`
//! - any log append adds `EventLog`
//! - a win adds `GameEnded(Some(winner))`, `endGame` adds `GameEnded(None)`
//!
//! Queries never broadcast.

mod command;
mod game;
mod shared;
mod snapshot;

pub use command::{Command, Dispatch, Reply};
pub use game::GameSession;
pub use shared::SharedSession;
pub use snapshot::LobbySnapshot;
