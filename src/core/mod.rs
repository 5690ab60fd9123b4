//! Core engine types: players, roles, RNG, configuration, errors.
//!
//! These are the leaf building blocks used by every other module.

pub mod player;
pub mod role;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{Player, PlayerId};
pub use role::{Faction, Role, WitchPotions};
pub use rng::{GameRng, GameRngState};
pub use config::GameConfig;
pub use error::{GameError, GameResult};
