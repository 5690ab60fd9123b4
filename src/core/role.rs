//! Role identities and their capability data.
//!
//! Roles form a closed set. Capabilities that only one role has live on
//! that variant: the witch's potion charges exist only inside
//! [`Role::Witch`].
//!
//! ## Role names
//!
//! Start multisets arrive as role names. [`Role::from_str`] accepts the
//! German table names (`Werwolf`, `Seherin`, `Hexe`, `Amor`, `Jäger`,
//! `Dorfbewohner`) and their English equivalents, case-insensitively.
//! `Display` always prints the German name.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Which side a role plays for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    /// Wolf-aligned antagonists.
    Werewolves,
    /// Everyone else.
    Villagers,
}

/// The witch's single-use potions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WitchPotions {
    /// Healing potion still available.
    pub heal: bool,
    /// Poison potion still available.
    pub poison: bool,
}

impl WitchPotions {
    /// Both potions available.
    #[must_use]
    pub const fn full() -> Self {
        Self { heal: true, poison: true }
    }
}

impl Default for WitchPotions {
    fn default() -> Self {
        Self::full()
    }
}

/// A dealt role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Kills one villager each night.
    Werewolf,
    /// Inspects a player's role.
    Seer,
    /// Holds one healing and one poison potion.
    Witch(WitchPotions),
    /// Makes two players lovers.
    Cupid,
    /// Takes someone along when dying.
    Hunter,
    /// No special power. Default fill role.
    Villager,
}

impl Role {
    /// All role kinds, with fresh capability data.
    pub const ALL: [Role; 6] = [
        Role::Werewolf,
        Role::Seer,
        Role::Witch(WitchPotions::full()),
        Role::Cupid,
        Role::Hunter,
        Role::Villager,
    ];

    /// German table name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Role::Werewolf => "Werwolf",
            Role::Seer => "Seherin",
            Role::Witch(_) => "Hexe",
            Role::Cupid => "Amor",
            Role::Hunter => "Jäger",
            Role::Villager => "Dorfbewohner",
        }
    }

    /// Faction this role plays for.
    #[must_use]
    pub const fn faction(&self) -> Faction {
        match self {
            Role::Werewolf => Faction::Werewolves,
            _ => Faction::Villagers,
        }
    }

    /// Check if this role is wolf-aligned.
    #[must_use]
    pub const fn is_wolf(&self) -> bool {
        matches!(self.faction(), Faction::Werewolves)
    }

    /// Check if two roles are the same kind, ignoring capability data.
    #[must_use]
    pub fn same_kind(&self, other: &Role) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Same role with capability data reinitialized.
    #[must_use]
    pub const fn fresh(self) -> Self {
        match self {
            Role::Witch(_) => Role::Witch(WitchPotions::full()),
            other => other,
        }
    }

    /// Witch potions, if this is the witch.
    #[must_use]
    pub fn potions(&self) -> Option<&WitchPotions> {
        match self {
            Role::Witch(potions) => Some(potions),
            _ => None,
        }
    }

    /// Mutable witch potions, if this is the witch.
    pub fn potions_mut(&mut self) -> Option<&mut WitchPotions> {
        match self {
            Role::Witch(potions) => Some(potions),
            _ => None,
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Villager
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        let role = match lowered.as_str() {
            "werwolf" | "werewolf" | "wolf" => Role::Werewolf,
            "seherin" | "seher" | "seer" => Role::Seer,
            "hexe" | "witch" => Role::Witch(WitchPotions::full()),
            "amor" | "cupid" => Role::Cupid,
            "jäger" | "jaeger" | "hunter" => Role::Hunter,
            "dorfbewohner" | "villager" => Role::Villager,
            _ => return Err(GameError::UnknownRole(s.to_string())),
        };
        Ok(role)
    }
}
