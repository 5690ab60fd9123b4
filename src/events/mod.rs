//! Event journal and broadcast signals.
//!
//! ## Key Components
//!
//! - [`EventLog`]: bounded journal of notable occurrences, for observers
//!   and late joiners
//! - [`Broadcast`]: what the transport must fan out after a command
//!
//! ## Example Usage
//!
//! ```
//! use werwolf_engine::events::{EventKind, EventLog};
//!
//! let mut log = EventLog::new(2);
//! log.log(EventKind::Start, "Spiel gestartet.");
//! log.log(EventKind::Phase, "Tagphase beginnt.");
//! log.log(EventKind::Phase, "Nachtphase beginnt.");
//!
//! assert_eq!(log.len(), 2);
//! assert_eq!(log.entries()[0].message, "Tagphase beginnt.");
//! ```

mod broadcast;
mod log;

pub use broadcast::{Broadcast, Broadcasts};
pub use log::{EventKind, EventLog, EventLogEntry, DEFAULT_LOG_CAPACITY};
