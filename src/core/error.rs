//! Error types for game commands.
//!
//! Every error is local and non-fatal. A command that fails has not
//! mutated any state.

use thiserror::Error;

use crate::phase::Phase;

/// Errors from game commands.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("game already started")]
    AlreadyStarted,

    #[error("name already taken: {0}")]
    NameTaken(String),

    #[error("at least {required} players required, {registered} registered")]
    InsufficientPlayers { required: usize, registered: usize },

    #[error("{action} not allowed during {phase}")]
    InvalidPhase { action: &'static str, phase: Phase },

    #[error("player not found: {0}")]
    NotFound(String),

    #[error("precondition failed: {0}")]
    PreconditionFailed(String),

    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl GameError {
    /// Stable identifier for wire formats.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            GameError::AlreadyStarted => "already_started",
            GameError::NameTaken(_) => "name_taken",
            GameError::InsufficientPlayers { .. } => "insufficient_players",
            GameError::InvalidPhase { .. } => "invalid_phase",
            GameError::NotFound(_) => "not_found",
            GameError::PreconditionFailed(_) => "precondition_failed",
            GameError::UnknownRole(_) => "unknown_role",
            GameError::Config(_) => "config",
        }
    }

    pub(crate) fn precondition(reason: impl Into<String>) -> Self {
        GameError::PreconditionFailed(reason.into())
    }
}

/// Result alias for game commands.
pub type GameResult<T> = Result<T, GameError>;
