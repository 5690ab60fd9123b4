//! # werwolf-engine
//!
//! Authoritative game-state engine for Werewolf/Mafia style social
//! deduction games.
//!
//! ## Design Principles
//!
//! 1. **Transport-Agnostic**: Commands go in, replies and broadcast
//!    signals come out. Delivering them to clients is the host's job.
//!
//! 2. **All-or-Nothing Commands**: Every command validates before it
//!    mutates. A failed command changes nothing.
//!
//! 3. **Typed Roles**: Roles are a closed enum. Capability data (the
//!    witch's potions) lives on the variant that owns it.
//!
//! 4. **Fair Dealing**: Roles are dealt with a seeded Fisher–Yates shuffle.
//!
//! ## Modules
//!
//! - `core`: Players, roles, RNG, configuration, errors
//! - `roster`: Ordered, name-unique player collection
//! - `rules`: Role dealing and win evaluation
//! - `phase`: Lobby/Night/Day/Ended state machine
//! - `actions`: Role and moderator actions and their resolver
//! - `events`: Bounded event log and broadcast signals
//! - `session`: The game session and command dispatcher

pub mod core;
pub mod roster;
pub mod rules;
pub mod phase;
pub mod actions;
pub mod events;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Faction, GameConfig, GameError, GameResult, GameRng, GameRngState,
    Player, PlayerId, Role, WitchPotions,
};

pub use crate::roster::Roster;

pub use crate::rules::{RoleAssigner, WinEvaluator, Winner};

pub use crate::phase::{GameStatus, Phase, PhaseMachine};

pub use crate::actions::{ActionOutcome, ActionResolver, GameAction, ResolverContext, WitchPotion};

pub use crate::events::{Broadcast, Broadcasts, EventKind, EventLog, EventLogEntry};

pub use crate::session::{Command, Dispatch, GameSession, LobbySnapshot, Reply, SharedSession};
