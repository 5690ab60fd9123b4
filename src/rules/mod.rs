//! Game rules: role dealing and the win condition.

pub mod assign;
pub mod win;

pub use assign::RoleAssigner;
pub use win::{WinEvaluator, Winner};
