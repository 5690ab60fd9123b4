//! Thread-safe session handle for multi-threaded hosts.
//!
//! A single mutex serializes every command, so each one is atomic from
//! every other command's perspective.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{Command, Dispatch, GameSession};
use crate::core::GameResult;

/// Cloneable handle to one shared [`GameSession`].
#[derive(Clone, Debug, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<GameSession>>,
}

impl SharedSession {
    /// Wrap a session.
    #[must_use]
    pub fn new(session: GameSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Run one command under the lock.
    pub fn dispatch(&self, command: Command) -> GameResult<Dispatch> {
        self.lock().dispatch(command)
    }

    /// Run a closure with exclusive access.
    pub fn with<R>(&self, f: impl FnOnce(&mut GameSession) -> R) -> R {
        f(&mut self.lock())
    }

    // Commands leave state consistent even if a caller panicked while
    // holding the lock, so a poisoned mutex is still usable.
    fn lock(&self) -> MutexGuard<'_, GameSession> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
