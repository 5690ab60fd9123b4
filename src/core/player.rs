//! Player identification and per-player records.
//!
//! ## PlayerId
//!
//! Connection-scoped identifier handed out by the roster at registration.
//! Ids are never reused within a session, even after a player is removed.
//!
//! ## Player
//!
//! The roster entry: display name, dealt role, and the per-round flags
//! (alive, mayor, lover) plus a bag of transient role attributes.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::role::Role;

/// Stable identifier for a registered player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({})", self.0)
    }
}

/// A registered player.
///
/// `role` stays `None` until the role assigner deals the table. Witch
/// potion charges live inside [`Role::Witch`], not on the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Connection-scoped identity.
    pub id: PlayerId,

    /// Display name, unique among registered players.
    pub name: String,

    /// Dealt role, `None` while in the lobby.
    pub role: Option<Role>,

    /// Whether the player is still in the game.
    pub alive: bool,

    /// Mayor flag. At most one player holds it.
    pub mayor: bool,

    /// Lover flag (set by Cupid).
    pub lover: bool,

    /// Transient role attributes for the current round.
    ///
    /// Values are `i64`; booleans use 0/1.
    pub attributes: FxHashMap<String, i64>,
}

impl Player {
    /// Create a fresh lobby player.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            role: None,
            alive: true,
            mayor: false,
            lover: false,
            attributes: FxHashMap::default(),
        }
    }

    /// Check if this player is wolf-aligned.
    ///
    /// Players without a role are never wolf-aligned.
    #[must_use]
    pub fn is_wolf(&self) -> bool {
        self.role.as_ref().is_some_and(Role::is_wolf)
    }

    /// Check if this player is a living witch.
    #[must_use]
    pub fn is_living_witch(&self) -> bool {
        self.alive && matches!(self.role, Some(Role::Witch(_)))
    }

    /// Get a transient attribute with default.
    #[must_use]
    pub fn attribute(&self, key: &str, default: i64) -> i64 {
        self.attributes.get(key).copied().unwrap_or(default)
    }

    /// Set a transient attribute.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: i64) {
        self.attributes.insert(key.into(), value);
    }

    /// Reset to lobby defaults, keeping identity and name.
    pub fn reset(&mut self) {
        self.role = None;
        self.alive = true;
        self.mayor = false;
        self.lover = false;
        self.attributes.clear();
    }

    /// Deal a role and reinitialize every per-round field.
    pub fn deal(&mut self, role: Role) {
        self.role = Some(role.fresh());
        self.alive = true;
        self.mayor = false;
        self.lover = false;
        self.attributes.clear();
    }
}
