//! Dealing roles onto the roster.

use tracing::debug;

use crate::core::{GameRng, Role};
use crate::roster::Roster;

/// Deals a role multiset onto the roster.
///
/// Both the seat order and the multiset are shuffled with Fisher–Yates
/// and zipped by position. Seats beyond the multiset get the fill role.
/// Dealing is the only place roles and per-round consumables are
/// (re)initialized.
pub struct RoleAssigner;

impl RoleAssigner {
    /// Deal `roles` onto every player in `roster`.
    ///
    /// The roster keeps its registration order; only the seat-to-role
    /// mapping is random.
    pub fn assign(roster: &mut Roster, roles: &[Role], fill: Role, rng: &mut GameRng) {
        let seats = rng.permutation(roster.len());
        let mut deck = roles.to_vec();
        rng.shuffle(&mut deck);

        let players = roster.players_mut();
        for (position, &seat) in seats.iter().enumerate() {
            let role = deck.get(position).copied().unwrap_or(fill);
            players[seat].deal(role);
        }
        debug!(players = players.len(), roles = roles.len(), "roles dealt");
    }
}
