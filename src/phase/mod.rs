//! Phase machine and game status.
//!
//! ```
//! use werwolf_engine::core::Role;
//! use werwolf_engine::phase::{Phase, PhaseMachine};
//!
//! let mut machine = PhaseMachine::new();
//! machine.start(vec![Role::Werewolf], 5, 5).unwrap();
//! assert_eq!(machine.phase(), Phase::Night);
//!
//! machine.advance();
//! assert_eq!((machine.phase(), machine.round()), (Phase::Day, 1));
//!
//! machine.advance();
//! assert_eq!((machine.phase(), machine.round()), (Phase::Night, 2));
//! ```

mod machine;

pub use machine::{GameStatus, Phase, PhaseMachine};
