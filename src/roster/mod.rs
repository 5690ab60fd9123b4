//! Player roster.
//!
//! ## Key Types
//!
//! - `Roster`: ordered, name-unique player collection
//! - `Player`, `PlayerId`: re-exported from `core::player`

pub mod manager;

pub use manager::Roster;

// Re-export player types from core for convenience
pub use crate::core::player::{Player, PlayerId};
