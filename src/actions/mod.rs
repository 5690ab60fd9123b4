//! Role-specific and moderator actions.
//!
//! ## Key Types
//!
//! - [`GameAction`]: tagged union of everything a player or moderator can do
//! - [`ActionResolver`]: validates an action and applies it to the roster
//! - [`ActionOutcome`]: what the action did
//!
//! ## Phase gates
//!
//! | Action | Allowed in |
//! |---|---|
//! | `WerewolfVote` | Night |
//! | `Vote` | Day |
//! | `SeerCheck` | any (Night only if configured) |
//! | `Witch` | any, needs a living witch |
//! | `ModeratorKill` | any |

mod action;
mod resolver;

pub use action::{ActionOutcome, GameAction, WitchPotion};
pub use resolver::{ActionResolver, ResolverContext};
