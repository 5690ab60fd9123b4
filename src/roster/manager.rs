//! Ordered player collection.
//!
//! The `Roster` keeps players in registration order and enforces name
//! uniqueness. Phase-dependent operations take the current [`Phase`] as
//! an argument; the roster never owns game status.

use tracing::debug;

use crate::core::{GameError, GameResult, Player, PlayerId};
use crate::phase::Phase;

/// Registered players in registration order.
///
/// ## Usage
///
/// ```
/// use werwolf_engine::roster::Roster;
/// use werwolf_engine::phase::Phase;
///
/// let mut roster = Roster::new();
/// roster.register("Anna", Phase::Lobby).unwrap();
/// assert!(roster.register("Anna", Phase::Lobby).is_err());
/// assert_eq!(roster.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Roster {
    players: Vec<Player>,
    next_id: u32,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Check if nobody is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Players in registration order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Mutable access for the role assigner.
    pub(crate) fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    /// Iterate over players.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Iterate over living players.
    pub fn alive(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.alive)
    }

    /// Names in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.players.iter().map(|p| p.name.clone()).collect()
    }

    /// Register a new player.
    ///
    /// Fails with `AlreadyStarted` outside the lobby and `NameTaken` if
    /// the name is in use.
    pub fn register(&mut self, name: &str, phase: Phase) -> GameResult<&Player> {
        if phase != Phase::Lobby {
            return Err(GameError::AlreadyStarted);
        }
        if name.trim().is_empty() {
            return Err(GameError::precondition("name must not be blank"));
        }
        if self.find(name).is_some() {
            return Err(GameError::NameTaken(name.to_string()));
        }

        let id = PlayerId::new(self.next_id);
        self.next_id += 1;
        self.players.push(Player::new(id, name));
        debug!(%id, name, "player registered");

        Ok(&self.players[self.players.len() - 1])
    }

    /// Remove a player. Lobby only.
    pub fn remove(&mut self, name: &str, phase: Phase) -> GameResult<Player> {
        if phase != Phase::Lobby {
            return Err(GameError::InvalidPhase { action: "removePlayer", phase });
        }
        let index = self.index_of(name)?;
        Ok(self.players.remove(index))
    }

    /// Find a player by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    /// Find a player by id.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Find a player by id, mutably.
    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Find a player by name, mutably.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.name == name)
    }

    /// Find a player by name or fail with `NotFound`.
    pub fn require(&self, name: &str) -> GameResult<&Player> {
        self.find(name).ok_or_else(|| GameError::NotFound(name.to_string()))
    }

    /// Find a living player by name.
    ///
    /// Fails with `NotFound` if absent, `PreconditionFailed` if dead.
    pub fn require_alive(&self, name: &str) -> GameResult<&Player> {
        let player = self.require(name)?;
        if !player.alive {
            return Err(GameError::precondition(format!("{} is already dead", name)));
        }
        Ok(player)
    }

    /// Make `name` the only mayor. Blocked once the game has ended.
    pub fn set_mayor(&mut self, name: &str, phase: Phase) -> GameResult<()> {
        if phase == Phase::Ended {
            return Err(GameError::InvalidPhase { action: "setMayor", phase });
        }
        let index = self.index_of(name)?;
        for player in &mut self.players {
            player.mayor = false;
        }
        self.players[index].mayor = true;
        Ok(())
    }

    /// Flip a player's alive flag. Not allowed in the lobby.
    ///
    /// Returns the new alive state.
    pub fn toggle_alive(&mut self, name: &str, phase: Phase) -> GameResult<bool> {
        if phase == Phase::Lobby {
            return Err(GameError::InvalidPhase { action: "toggleAlive", phase });
        }
        let index = self.index_of(name)?;
        let player = &mut self.players[index];
        player.alive = !player.alive;
        Ok(player.alive)
    }

    /// Kill a living player.
    pub fn kill(&mut self, name: &str) -> GameResult<PlayerId> {
        let id = self.require_alive(name)?.id;
        let index = self.index_of(name)?;
        self.players[index].alive = false;
        Ok(id)
    }

    /// Bring a dead player back.
    pub fn revive(&mut self, name: &str) -> GameResult<PlayerId> {
        let player = self.require(name)?;
        if player.alive {
            return Err(GameError::precondition(format!("{} is not dead", name)));
        }
        let id = player.id;
        let index = self.index_of(name)?;
        self.players[index].alive = true;
        Ok(id)
    }

    /// Return every player to lobby defaults, keeping membership.
    pub fn reset_all(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
    }

    fn index_of(&self, name: &str) -> GameResult<usize> {
        self.players
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| GameError::NotFound(name.to_string()))
    }
}
