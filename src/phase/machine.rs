//! Lobby → Night → Day → … → Ended state machine.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{GameError, GameResult, Role};

/// Current stage of the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Before the game starts.
    #[default]
    Lobby,
    /// Hidden role actions.
    Night,
    /// Open voting.
    Day,
    /// A faction has won.
    Ended,
}

impl Phase {
    /// Lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Lobby => "lobby",
            Phase::Night => "night",
            Phase::Day => "day",
            Phase::Ended => "ended",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Observable game status.
///
/// `phase == Lobby` exactly when `started` is false, and `round` is 0
/// only in the lobby.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    /// Whether a game is in progress (or ended but not reset).
    pub started: bool,
    /// Current phase.
    pub phase: Phase,
    /// Round counter, incremented each time night begins.
    pub round: u32,
    /// Role multiset the current game was dealt from.
    pub roles: Vec<Role>,
}

/// Owner of [`GameStatus`] and the only code that changes it.
#[derive(Clone, Debug, Default)]
pub struct PhaseMachine {
    status: GameStatus,
}

impl PhaseMachine {
    /// Create a machine in the lobby.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.status.phase
    }

    /// Current round.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.status.round
    }

    /// Check if a game is in progress.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.status.started
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.status.phase == Phase::Ended
    }

    /// Check that a game can start with this roster and multiset.
    pub fn check_start(&self, roles: &[Role], registered: usize, min_players: usize) -> GameResult<()> {
        if self.status.started {
            return Err(GameError::AlreadyStarted);
        }
        if registered < min_players {
            return Err(GameError::InsufficientPlayers {
                required: min_players,
                registered,
            });
        }
        if roles.len() > registered {
            return Err(GameError::precondition(format!(
                "{} roles configured for {} players",
                roles.len(),
                registered
            )));
        }
        Ok(())
    }

    /// Start a game: Night of round 1.
    ///
    /// The caller deals roles afterwards.
    pub fn start(&mut self, roles: Vec<Role>, registered: usize, min_players: usize) -> GameResult<()> {
        self.check_start(&roles, registered, min_players)?;

        self.status = GameStatus {
            started: true,
            phase: Phase::Night,
            round: 1,
            roles,
        };
        info!(players = registered, "game started");
        Ok(())
    }

    /// Advance to the next phase.
    ///
    /// Night becomes Day in the same round; Day becomes Night of the next
    /// round. Returns `None` without changing anything if no game is
    /// running or the game has ended. The caller must evaluate the win
    /// condition afterwards.
    pub fn advance(&mut self) -> Option<Phase> {
        if !self.status.started || self.is_ended() {
            return None;
        }
        self.status.phase = match self.status.phase {
            Phase::Night => Phase::Day,
            _ => {
                self.status.round += 1;
                Phase::Night
            }
        };
        info!(phase = %self.status.phase, round = self.status.round, "phase advanced");
        Some(self.status.phase)
    }

    /// Moderator switch: toggles strictly between Night and Day.
    ///
    /// Any other phase is left alone and yields `None`.
    pub fn moderator_advance(&mut self) -> Option<Phase> {
        if !self.status.started {
            return None;
        }
        self.status.phase = match self.status.phase {
            Phase::Night => Phase::Day,
            Phase::Day => {
                self.status.round += 1;
                Phase::Night
            }
            Phase::Lobby | Phase::Ended => return None,
        };
        info!(phase = %self.status.phase, round = self.status.round, "moderator switched phase");
        Some(self.status.phase)
    }

    /// Force the terminal phase after a win.
    pub fn force_end(&mut self) {
        if self.status.started {
            self.status.phase = Phase::Ended;
        }
    }

    /// Back to lobby defaults.
    pub fn reset(&mut self) {
        self.status = GameStatus::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> PhaseMachine {
        let mut machine = PhaseMachine::new();
        machine.start(vec![Role::Werewolf], 5, 5).unwrap();
        machine
    }

    #[test]
    fn test_new_is_lobby() {
        let machine = PhaseMachine::new();
        assert_eq!(machine.phase(), Phase::Lobby);
        assert_eq!(machine.round(), 0);
        assert!(!machine.is_started());
    }

    #[test]
    fn test_start() {
        let machine = started();
        assert_eq!(machine.phase(), Phase::Night);
        assert_eq!(machine.round(), 1);
        assert!(machine.is_started());
        assert_eq!(machine.status().roles, vec![Role::Werewolf]);
    }

    #[test]
    fn test_start_twice() {
        let mut machine = started();
        assert_eq!(machine.start(vec![], 5, 5).unwrap_err(), GameError::AlreadyStarted);
    }

    #[test]
    fn test_start_insufficient_players() {
        let mut machine = PhaseMachine::new();
        let err = machine.start(vec![], 4, 5).unwrap_err();
        assert_eq!(err, GameError::InsufficientPlayers { required: 5, registered: 4 });
        assert_eq!(machine.phase(), Phase::Lobby);
    }

    #[test]
    fn test_start_too_many_roles() {
        let mut machine = PhaseMachine::new();
        let roles = vec![Role::Villager; 6];
        assert!(matches!(machine.start(roles, 5, 5), Err(GameError::PreconditionFailed(_))));
        assert!(!machine.is_started());
    }

    #[test]
    fn test_advance_not_started() {
        let mut machine = PhaseMachine::new();
        assert_eq!(machine.advance(), None);
        assert_eq!(machine.phase(), Phase::Lobby);
    }

    #[test]
    fn test_advance_alternates() {
        let mut machine = started();
        assert_eq!(machine.advance(), Some(Phase::Day));
        assert_eq!(machine.round(), 1);
        assert_eq!(machine.advance(), Some(Phase::Night));
        assert_eq!(machine.round(), 2);
        assert_eq!(machine.advance(), Some(Phase::Day));
        assert_eq!(machine.round(), 2);
    }

    #[test]
    fn test_ended_is_terminal() {
        let mut machine = started();
        machine.force_end();
        assert_eq!(machine.advance(), None);
        assert_eq!(machine.moderator_advance(), None);
        assert_eq!(machine.phase(), Phase::Ended);
    }

    #[test]
    fn test_moderator_advance() {
        let mut machine = PhaseMachine::new();
        assert_eq!(machine.moderator_advance(), None);

        let mut machine = started();
        assert_eq!(machine.moderator_advance(), Some(Phase::Day));
        assert_eq!(machine.round(), 1);
        assert_eq!(machine.moderator_advance(), Some(Phase::Night));
        assert_eq!(machine.round(), 2);
    }

    #[test]
    fn test_force_end_requires_started() {
        let mut machine = PhaseMachine::new();
        machine.force_end();
        assert_eq!(machine.phase(), Phase::Lobby);
    }

    #[test]
    fn test_reset() {
        let mut machine = started();
        machine.advance();
        machine.reset();
        assert_eq!(machine.status(), &GameStatus::default());
    }

    #[test]
    fn test_phase_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Phase::Night).unwrap(), "\"night\"");
    }
}
