//! GameSession - the single owner of roster, status, and event log.
//!
//! Every command runs to completion (validate → mutate → log → signal)
//! before the next one starts. The session never talks to clients; each
//! command returns a [`Dispatch`] whose broadcasts the transport fans out.

use im::Vector;
use tracing::{info, instrument, warn};

use super::{Command, Dispatch, LobbySnapshot, Reply};
use crate::actions::{ActionOutcome, ActionResolver, GameAction, ResolverContext, WitchPotion};
use crate::core::{GameConfig, GameResult, GameRng, Role};
use crate::events::{Broadcast, Broadcasts, EventKind, EventLog, EventLogEntry};
use crate::phase::{GameStatus, Phase, PhaseMachine};
use crate::roster::Roster;
use crate::rules::{RoleAssigner, WinEvaluator, Winner};

/// One game instance.
///
/// The host creates a session once and routes every command through it.
///
/// ```
/// use werwolf_engine::core::GameConfig;
/// use werwolf_engine::phase::Phase;
/// use werwolf_engine::session::GameSession;
///
/// let mut session = GameSession::new(GameConfig::new().with_seed(1)).unwrap();
/// for name in ["A", "B", "C", "D", "E"] {
///     session.register(name).unwrap();
/// }
/// session.start_game(&["Werwolf", "Seherin", "Hexe", "Dorfbewohner"]).unwrap();
///
/// assert_eq!(session.status().phase, Phase::Night);
/// assert_eq!(session.status().round, 1);
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    roster: Roster,
    machine: PhaseMachine,
    log: EventLog,
    rng: GameRng,
}

impl Default for GameSession {
    fn default() -> Self {
        let config = GameConfig::default();
        Self {
            log: EventLog::new(config.log_capacity),
            rng: GameRng::from_seed(config.seed),
            roster: Roster::new(),
            machine: PhaseMachine::new(),
            config,
        }
    }
}

impl GameSession {
    /// Create a session from a validated configuration.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        config.validate()?;
        Ok(Self {
            log: EventLog::new(config.log_capacity),
            rng: GameRng::from_seed(config.seed),
            roster: Roster::new(),
            machine: PhaseMachine::new(),
            config,
        })
    }

    // === Accessors ===

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Registered players.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Current game status.
    #[must_use]
    pub fn status(&self) -> &GameStatus {
        self.machine.status()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.machine.phase()
    }

    /// Event journal.
    #[must_use]
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Event log snapshot, oldest first.
    #[must_use]
    pub fn event_log(&self) -> Vector<EventLogEntry> {
        self.log.snapshot()
    }

    /// Roster + status as observers see it.
    #[must_use]
    pub fn lobby(&self) -> LobbySnapshot {
        LobbySnapshot {
            players: self.roster.players().to_vec(),
            status: self.machine.status().clone(),
        }
    }

    // === Dispatch ===

    /// Route a decoded command.
    #[instrument(skip_all, fields(command = command.name()))]
    pub fn dispatch(&mut self, command: Command) -> GameResult<Dispatch> {
        let result = match command {
            Command::Register { name } => self.register(&name),
            Command::GetLobby => Ok(Dispatch::reply(Reply::Lobby(self.lobby()))),
            Command::StartGame { roles } => self.start_game(&roles),
            Command::NextPhase => Ok(self.next_phase()),
            Command::WerewolfVote { target } => self.werewolf_vote(&target),
            Command::SeerCheck { target } => self.seer_check(&target),
            Command::WitchAction { action, target } => self.witch_action(action, &target),
            Command::Vote { target } => self.vote(&target),
            Command::GetEventLog => Ok(Dispatch::reply(Reply::EventLog(self.event_log()))),
            Command::ModeratorKill { target } => self.moderator_kill(&target),
            Command::RemovePlayer { name } => self.remove_player(&name),
            Command::SetMayor { name } => self.set_mayor(&name),
            Command::ToggleAlive { name } => self.toggle_alive(&name),
            Command::ModeratorSwitchPhase => Ok(self.moderator_switch_phase()),
            Command::EndGame => Ok(self.end_game()),
        };
        if let Err(e) = &result {
            warn!(error = %e, code = e.code(), "command rejected");
        }
        result
    }

    // === Lobby ===

    /// Join the lobby.
    pub fn register(&mut self, name: &str) -> GameResult<Dispatch> {
        let player = self.roster.register(name, self.machine.phase())?.clone();
        Ok(self.changed(Reply::Player(player), false))
    }

    /// Leave the lobby.
    pub fn remove_player(&mut self, name: &str) -> GameResult<Dispatch> {
        let removed = self.roster.remove(name, self.machine.phase())?;
        info!(name = %removed.name, "player removed");
        Ok(self.changed(Reply::Ack, false))
    }

    /// Start from role names.
    pub fn start_game<S: AsRef<str>>(&mut self, roles: &[S]) -> GameResult<Dispatch> {
        let roles = roles
            .iter()
            .map(|name| name.as_ref().parse::<Role>())
            .collect::<GameResult<Vec<_>>>()?;
        self.start_with_roles(roles)
    }

    /// Start with an already parsed multiset: first night, roles dealt.
    pub fn start_with_roles(&mut self, roles: Vec<Role>) -> GameResult<Dispatch> {
        self.machine
            .start(roles, self.roster.len(), self.config.min_players)?;
        RoleAssigner::assign(
            &mut self.roster,
            &self.machine.status().roles,
            self.config.default_role,
            &mut self.rng,
        );
        self.log.log(EventKind::Start, "Spiel gestartet.");
        Ok(self.changed(Reply::Ack, true))
    }

    // === Phases ===

    /// Advance the phase, then let the win check have the final say.
    ///
    /// Ignored when no game is running or the game has ended.
    pub fn next_phase(&mut self) -> Dispatch {
        let Some(phase) = self.machine.advance() else {
            return Dispatch::ignored();
        };
        self.log_phase(phase);

        let mut broadcasts = Broadcasts::new();
        broadcasts.push(Broadcast::PhaseChange(phase));
        if let Some(winner) = self.check_winner() {
            broadcasts.push(Broadcast::GameEnded(Some(winner)));
        }
        self.finish(Reply::None, broadcasts, true)
    }

    /// Moderator switch between night and day. Never ends the game.
    pub fn moderator_switch_phase(&mut self) -> Dispatch {
        let Some(phase) = self.machine.moderator_advance() else {
            return Dispatch::ignored();
        };
        self.log_phase(phase);

        let mut broadcasts = Broadcasts::new();
        broadcasts.push(Broadcast::PhaseChange(phase));
        self.finish(Reply::None, broadcasts, true)
    }

    /// Reset to the lobby. Players stay registered; the log is emptied.
    pub fn end_game(&mut self) -> Dispatch {
        self.machine.reset();
        self.roster.reset_all();
        self.log.clear();
        info!(players = self.roster.len(), "game reset to lobby");

        let mut broadcasts = Broadcasts::new();
        broadcasts.push(Broadcast::GameEnded(None));
        self.finish(Reply::Ack, broadcasts, true)
    }

    // === Actions ===

    /// Night kill by the werewolves.
    pub fn werewolf_vote(&mut self, target: &str) -> GameResult<Dispatch> {
        self.submit(GameAction::WerewolfVote { target: target.to_string() })
    }

    /// Seer inspection. Replies with the target's role.
    pub fn seer_check(&mut self, target: &str) -> GameResult<Dispatch> {
        self.submit(GameAction::SeerCheck { target: target.to_string() })
    }

    /// Witch potion.
    pub fn witch_action(&mut self, potion: WitchPotion, target: &str) -> GameResult<Dispatch> {
        self.submit(GameAction::Witch { potion, target: target.to_string() })
    }

    /// Day lynch.
    pub fn vote(&mut self, target: &str) -> GameResult<Dispatch> {
        self.submit(GameAction::Vote { target: target.to_string() })
    }

    /// Moderator kill.
    pub fn moderator_kill(&mut self, target: &str) -> GameResult<Dispatch> {
        self.submit(GameAction::ModeratorKill { target: target.to_string() })
    }

    /// Resolve any action.
    pub fn submit(&mut self, action: GameAction) -> GameResult<Dispatch> {
        let mut ctx = ResolverContext::new(&mut self.roster, &mut self.log, self.machine.phase())
            .with_seer_night_only(self.config.seer_night_only);
        let outcome = ActionResolver::resolve(&mut ctx, &action)?;

        let reply = match outcome {
            ActionOutcome::Revealed { role, .. } => Reply::Role(role),
            _ if matches!(action, GameAction::Witch { .. }) => Reply::Ack,
            _ => Reply::None,
        };

        let mut broadcasts = Broadcasts::new();
        if outcome.changed_alive() {
            if self.config.check_win_after_kills {
                if let Some(winner) = self.check_winner() {
                    broadcasts.push(Broadcast::GameEnded(Some(winner)));
                }
            }
            broadcasts.push(Broadcast::LobbyUpdate(self.lobby()));
        }
        broadcasts.push(Broadcast::EventLog(self.log.snapshot()));
        Ok(Dispatch { reply, broadcasts })
    }

    // === Moderator tools ===

    /// Hand the mayor flag to one player.
    pub fn set_mayor(&mut self, name: &str) -> GameResult<Dispatch> {
        self.roster.set_mayor(name, self.machine.phase())?;
        self.log
            .log(EventKind::Moderator, format!("Moderator hat {} zum Bürgermeister ernannt.", name));
        Ok(self.changed(Reply::Ack, true))
    }

    /// Flip a player's alive flag.
    pub fn toggle_alive(&mut self, name: &str) -> GameResult<Dispatch> {
        let alive = self.roster.toggle_alive(name, self.machine.phase())?;
        let verb = if alive { "wiederbelebt" } else { "getötet" };
        self.log
            .log(EventKind::Moderator, format!("Moderator hat {} {}.", name, verb));
        Ok(self.changed(Reply::Ack, true))
    }

    // === Internals ===

    fn log_phase(&mut self, phase: Phase) {
        let message = match phase {
            Phase::Day => "Tagphase beginnt.",
            _ => "Nachtphase beginnt.",
        };
        self.log.log(EventKind::Phase, message);
    }

    /// End the game if a faction has won. Only while night or day runs.
    fn check_winner(&mut self) -> Option<Winner> {
        if !matches!(self.machine.phase(), Phase::Night | Phase::Day) {
            return None;
        }
        let winner = WinEvaluator::evaluate(&self.roster)?;
        self.machine.force_end();
        self.log.log(
            EventKind::End,
            format!("Das Spiel ist beendet. Gewinner: {}", winner),
        );
        info!(%winner, round = self.machine.round(), "game ended");
        Some(winner)
    }

    fn changed(&self, reply: Reply, logged: bool) -> Dispatch {
        self.finish(reply, Broadcasts::new(), logged)
    }

    /// Append the lobby update and, if the log changed, the full log.
    fn finish(&self, reply: Reply, mut broadcasts: Broadcasts, logged: bool) -> Dispatch {
        broadcasts.push(Broadcast::LobbyUpdate(self.lobby()));
        if logged {
            broadcasts.push(Broadcast::EventLog(self.log.snapshot()));
        }
        Dispatch { reply, broadcasts }
    }
}
