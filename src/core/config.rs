//! Game configuration.
//!
//! The host configures a session once at startup. All fields have
//! defaults matching the classic table rules, so an empty TOML document
//! is a valid configuration:
//!
//! ```
//! use werwolf_engine::core::GameConfig;
//!
//! let config = GameConfig::from_toml_str("seed = 7\nmin_players = 6").unwrap();
//! assert_eq!(config.seed, Some(7));
//! assert_eq!(config.min_players, 6);
//! assert_eq!(config.log_capacity, 100);
//! ```

use serde::{Deserialize, Serialize};

use super::error::{GameError, GameResult};
use super::role::Role;

/// Session-wide configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Minimum roster size for `start`.
    pub min_players: usize,

    /// Maximum number of event log entries kept.
    pub log_capacity: usize,

    /// Role dealt to players beyond the configured multiset.
    pub default_role: Role,

    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Re-evaluate the win condition after every kill, not only after a
    /// phase advance.
    pub check_win_after_kills: bool,

    /// Restrict seer checks to the night phase.
    pub seer_night_only: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: 5,
            log_capacity: 100,
            default_role: Role::Villager,
            seed: None,
            check_win_after_kills: false,
            seer_night_only: false,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> GameResult<Self> {
        let config: GameConfig =
            toml::from_str(source).map_err(|e| GameError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> GameResult<()> {
        if self.min_players == 0 {
            return Err(GameError::Config("min_players must be at least 1".into()));
        }
        if self.log_capacity == 0 {
            return Err(GameError::Config("log_capacity must be at least 1".into()));
        }
        Ok(())
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the minimum roster size.
    #[must_use]
    pub fn with_min_players(mut self, min_players: usize) -> Self {
        self.min_players = min_players;
        self
    }

    /// Set the event log bound.
    #[must_use]
    pub fn with_log_capacity(mut self, capacity: usize) -> Self {
        self.log_capacity = capacity;
        self
    }

    /// Set the fill role.
    #[must_use]
    pub fn with_default_role(mut self, role: Role) -> Self {
        self.default_role = role;
        self
    }

    /// Check for a winner after every kill.
    #[must_use]
    pub fn check_win_after_kills(mut self) -> Self {
        self.check_win_after_kills = true;
        self
    }

    /// Only allow seer checks at night.
    #[must_use]
    pub fn seer_night_only(mut self) -> Self {
        self.seer_night_only = true;
        self
    }
}
