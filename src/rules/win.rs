//! Win condition evaluation.

use serde::{Deserialize, Serialize};

use crate::core::Faction;
use crate::roster::Roster;

/// Winning faction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    /// No wolves left alive.
    Villagers,
    /// Wolves at parity or better.
    Werewolves,
}

impl Winner {
    /// The faction that won.
    #[must_use]
    pub const fn faction(self) -> Faction {
        match self {
            Winner::Villagers => Faction::Villagers,
            Winner::Werewolves => Faction::Werewolves,
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::Villagers => f.write_str("Dorfbewohner"),
            Winner::Werewolves => f.write_str("Werwölfe"),
        }
    }
}

/// Pure win check over living players.
pub struct WinEvaluator;

impl WinEvaluator {
    /// Evaluate from alive counts.
    ///
    /// Villagers win with no wolves left; wolves win once they are at least
    /// as many as everyone else (ties favor wolves).
    #[must_use]
    pub fn from_counts(wolves: usize, others: usize) -> Option<Winner> {
        if wolves == 0 {
            Some(Winner::Villagers)
        } else if wolves >= others {
            Some(Winner::Werewolves)
        } else {
            None
        }
    }

    /// Evaluate the roster.
    #[must_use]
    pub fn evaluate(roster: &Roster) -> Option<Winner> {
        let (wolves, others) = roster.alive().fold((0, 0), |(wolves, others), player| {
            if player.is_wolf() {
                (wolves + 1, others)
            } else {
                (wolves, others + 1)
            }
        });
        Self::from_counts(wolves, others)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Role;
    use crate::phase::Phase;

    fn table(roles: &[(Role, bool)]) -> Roster {
        let mut roster = Roster::new();
        for (i, &(role, alive)) in roles.iter().enumerate() {
            let name = format!("P{}", i);
            roster.register(&name, Phase::Lobby).unwrap();
            let player = roster.find_mut(&name).unwrap();
            player.deal(role);
            player.alive = alive;
        }
        roster
    }

    #[test]
    fn test_no_wolves_villagers_win() {
        assert_eq!(WinEvaluator::from_counts(0, 3), Some(Winner::Villagers));
    }

    #[test]
    fn test_parity_wolves_win() {
        assert_eq!(WinEvaluator::from_counts(2, 2), Some(Winner::Werewolves));
        assert_eq!(WinEvaluator::from_counts(3, 1), Some(Winner::Werewolves));
    }

    #[test]
    fn test_minority_no_winner() {
        assert_eq!(WinEvaluator::from_counts(1, 2), None);
    }

    #[test]
    fn test_evaluate_ignores_dead() {
        let roster = table(&[
            (Role::Werewolf, true),
            (Role::Werewolf, false),
            (Role::Seer, true),
            (Role::Villager, true),
        ]);
        assert_eq!(WinEvaluator::evaluate(&roster), None);
    }

    #[test]
    fn test_evaluate_dead_wolves() {
        let roster = table(&[
            (Role::Werewolf, false),
            (Role::Seer, true),
            (Role::Villager, false),
        ]);
        assert_eq!(WinEvaluator::evaluate(&roster), Some(Winner::Villagers));
    }

    #[test]
    fn test_evaluate_wolf_parity() {
        let roster = table(&[
            (Role::Werewolf, true),
            (Role::Werewolf, true),
            (Role::Hunter, true),
            (Role::Cupid, true),
            (Role::Villager, false),
        ]);
        assert_eq!(WinEvaluator::evaluate(&roster), Some(Winner::Werewolves));
    }

    #[test]
    fn test_winner_display() {
        assert_eq!(Winner::Villagers.to_string(), "Dorfbewohner");
        assert_eq!(Winner::Werewolves.to_string(), "Werwölfe");
        assert_eq!(Winner::Werewolves.faction(), Faction::Werewolves);
    }
}
