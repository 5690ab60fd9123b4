//! Role and moderator actions as a tagged union.
//!
//! Each variant carries exactly the payload it needs, so a decoded action
//! is structurally valid before it reaches the resolver:
//!
//! ```
//! use werwolf_engine::actions::{GameAction, WitchPotion};
//!
//! let json = r#"{"action":"witch","potion":"heal","target":"Anna"}"#;
//! let action: GameAction = serde_json::from_str(json).unwrap();
//! assert_eq!(action, GameAction::Witch { potion: WitchPotion::Heal, target: "Anna".into() });
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Role};

/// Which witch potion to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WitchPotion {
    /// Revive a dead player.
    Heal,
    /// Kill a living player.
    Poison,
}

/// An action submitted against the current game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum GameAction {
    /// Night kill. The most recent vote wins; there is no tally.
    WerewolfVote { target: String },
    /// Inspect a player's role.
    SeerCheck { target: String },
    /// Use one of the witch's potions.
    Witch { potion: WitchPotion, target: String },
    /// Day lynch. Same last-write-wins rule as the night vote.
    Vote { target: String },
    /// Moderator kill, allowed in any phase.
    ModeratorKill { target: String },
}

impl GameAction {
    /// Wire name of the action.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            GameAction::WerewolfVote { .. } => "werewolfVote",
            GameAction::SeerCheck { .. } => "seerCheck",
            GameAction::Witch { .. } => "witchAction",
            GameAction::Vote { .. } => "vote",
            GameAction::ModeratorKill { .. } => "moderatorKill",
        }
    }

    /// Name of the targeted player.
    #[must_use]
    pub fn target(&self) -> &str {
        match self {
            GameAction::WerewolfVote { target }
            | GameAction::SeerCheck { target }
            | GameAction::Witch { target, .. }
            | GameAction::Vote { target }
            | GameAction::ModeratorKill { target } => target,
        }
    }
}

/// What a resolved action did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// The target died.
    Killed(PlayerId),
    /// The target came back to life.
    Revived(PlayerId),
    /// The seer learned the target's role (`None` before dealing).
    Revealed { player: PlayerId, role: Option<Role> },
}

impl ActionOutcome {
    /// Check if alive counts changed.
    #[must_use]
    pub fn changed_alive(&self) -> bool {
        !matches!(self, ActionOutcome::Revealed { .. })
    }
}
