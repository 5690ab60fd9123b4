//! Bounded event journal.
//!
//! The log keeps the most recent entries in insertion order and evicts
//! from the front once it exceeds its capacity. It is backed by an
//! `im::Vector`, so handing a snapshot to observers is O(1).

use chrono::{DateTime, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};

/// Default log capacity.
pub const DEFAULT_LOG_CAPACITY: usize = 100;

/// Kind of logged occurrence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Phase transition.
    Phase,
    /// Game start.
    Start,
    /// Night kill by the werewolves.
    Kill,
    /// Seer inspection.
    Seer,
    /// Witch potion.
    Witch,
    /// Day lynch.
    Vote,
    /// Moderator intervention.
    Moderator,
    /// Game over.
    End,
}

impl EventKind {
    /// Lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EventKind::Phase => "phase",
            EventKind::Start => "start",
            EventKind::Kill => "kill",
            EventKind::Seer => "seer",
            EventKind::Witch => "witch",
            EventKind::Vote => "vote",
            EventKind::Moderator => "moderator",
            EventKind::End => "end",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One journal line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLogEntry {
    /// When the entry was appended.
    pub time: DateTime<Utc>,
    /// What happened.
    #[serde(rename = "type")]
    pub kind: EventKind,
    /// Human-readable message.
    pub message: String,
}

/// Bounded FIFO of [`EventLogEntry`].
#[derive(Clone, Debug)]
pub struct EventLog {
    entries: Vector<EventLogEntry>,
    capacity: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY)
    }
}

impl EventLog {
    /// Create an empty log holding at most `capacity` entries.
    ///
    /// A capacity of 0 is treated as 1.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vector::new(),
            capacity: capacity.max(1),
        }
    }

    /// Maximum number of entries kept.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry stamped with the current time.
    pub fn log(&mut self, kind: EventKind, message: impl Into<String>) {
        self.log_at(Utc::now(), kind, message);
    }

    /// Append an entry with an explicit timestamp.
    pub fn log_at(&mut self, time: DateTime<Utc>, kind: EventKind, message: impl Into<String>) {
        self.entries.push_back(EventLogEntry {
            time,
            kind,
            message: message.into(),
        });
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &Vector<EventLogEntry> {
        &self.entries
    }

    /// Cheap copy of the current entries for observers.
    #[must_use]
    pub fn snapshot(&self) -> Vector<EventLogEntry> {
        self.entries.clone()
    }

    /// Most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&EventLogEntry> {
        self.entries.last()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
