//! Action resolution against the roster.
//!
//! The `ActionResolver` validates an action against the current phase and
//! roster, then applies it and appends exactly one log entry. Validation
//! always finishes before the first mutation, so a rejected action
//! leaves roster and log untouched.

use tracing::debug;

use crate::core::{GameError, GameResult, PlayerId, Role};
use crate::events::{EventKind, EventLog};
use crate::phase::Phase;
use crate::roster::Roster;

use super::{ActionOutcome, GameAction, WitchPotion};

/// Everything an action may read or mutate.
pub struct ResolverContext<'a> {
    /// Players.
    pub roster: &'a mut Roster,
    /// Journal receiving one entry per resolved action.
    pub log: &'a mut EventLog,
    /// Phase the action is submitted in.
    pub phase: Phase,
    /// Restrict seer checks to the night.
    pub seer_night_only: bool,
}

impl<'a> ResolverContext<'a> {
    /// Create a context with default rule switches.
    pub fn new(roster: &'a mut Roster, log: &'a mut EventLog, phase: Phase) -> Self {
        Self {
            roster,
            log,
            phase,
            seer_night_only: false,
        }
    }

    /// Only allow seer checks at night.
    #[must_use]
    pub fn with_seer_night_only(mut self, enabled: bool) -> Self {
        self.seer_night_only = enabled;
        self
    }
}

/// Resolves actions on the roster.
pub struct ActionResolver;

impl ActionResolver {
    /// Validate and apply one action.
    pub fn resolve(ctx: &mut ResolverContext<'_>, action: &GameAction) -> GameResult<ActionOutcome> {
        let outcome = match action {
            GameAction::WerewolfVote { target } => Self::werewolf_vote(ctx, target),
            GameAction::SeerCheck { target } => Self::seer_check(ctx, target),
            GameAction::Witch { potion, target } => Self::witch(ctx, *potion, target),
            GameAction::Vote { target } => Self::day_vote(ctx, target),
            GameAction::ModeratorKill { target } => Self::moderator_kill(ctx, target),
        }?;
        debug!(action = action.name(), target = action.target(), ?outcome, "action resolved");
        Ok(outcome)
    }

    fn werewolf_vote(ctx: &mut ResolverContext<'_>, target: &str) -> GameResult<ActionOutcome> {
        Self::require_phase(ctx.phase, Phase::Night, "werewolfVote")?;
        let id = ctx.roster.kill(target)?;
        ctx.log.log(EventKind::Kill, format!("Werwölfe haben {} getötet.", target));
        Ok(ActionOutcome::Killed(id))
    }

    fn seer_check(ctx: &mut ResolverContext<'_>, target: &str) -> GameResult<ActionOutcome> {
        if ctx.seer_night_only {
            Self::require_phase(ctx.phase, Phase::Night, "seerCheck")?;
        }
        let player = ctx.roster.require(target)?;
        let outcome = ActionOutcome::Revealed {
            player: player.id,
            role: player.role,
        };
        ctx.log.log(EventKind::Seer, format!("Seherin hat {} geprüft.", target));
        Ok(outcome)
    }

    fn witch(ctx: &mut ResolverContext<'_>, potion: WitchPotion, target: &str) -> GameResult<ActionOutcome> {
        let (witch, potions) = ctx
            .roster
            .iter()
            .find(|p| p.is_living_witch())
            .and_then(|p| Some((p.id, *p.role.as_ref()?.potions()?)))
            .ok_or_else(|| GameError::precondition("no living witch"))?;

        let (outcome, verb) = match potion {
            WitchPotion::Heal => {
                if !potions.heal {
                    return Err(GameError::precondition("healing potion already used"));
                }
                (ActionOutcome::Revived(ctx.roster.revive(target)?), "geheilt")
            }
            WitchPotion::Poison => {
                if !potions.poison {
                    return Err(GameError::precondition("poison potion already used"));
                }
                (ActionOutcome::Killed(ctx.roster.kill(target)?), "vergiftet")
            }
        };

        Self::spend_potion(ctx.roster, witch, potion);
        ctx.log.log(EventKind::Witch, format!("Hexe hat {} {}.", target, verb));
        Ok(outcome)
    }

    fn day_vote(ctx: &mut ResolverContext<'_>, target: &str) -> GameResult<ActionOutcome> {
        Self::require_phase(ctx.phase, Phase::Day, "vote")?;
        let id = ctx.roster.kill(target)?;
        ctx.log.log(EventKind::Vote, format!("{} wurde gehängt.", target));
        Ok(ActionOutcome::Killed(id))
    }

    fn moderator_kill(ctx: &mut ResolverContext<'_>, target: &str) -> GameResult<ActionOutcome> {
        let id = ctx.roster.kill(target)?;
        ctx.log.log(EventKind::Moderator, format!("Moderator hat {} getötet.", target));
        Ok(ActionOutcome::Killed(id))
    }

    fn require_phase(current: Phase, required: Phase, action: &'static str) -> GameResult<()> {
        if current != required {
            return Err(GameError::InvalidPhase { action, phase: current });
        }
        Ok(())
    }

    // Looked up by id: a witch who poisons herself is dead by now.
    fn spend_potion(roster: &mut Roster, witch: PlayerId, potion: WitchPotion) {
        let potions = roster
            .get_mut(witch)
            .and_then(|p| p.role.as_mut())
            .and_then(Role::potions_mut);
        if let Some(potions) = potions {
            match potion {
                WitchPotion::Heal => potions.heal = false,
                WitchPotion::Poison => potions.poison = false,
            }
        }
    }
}
