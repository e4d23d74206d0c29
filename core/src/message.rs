//! Shared, append-only message log.
//!
//! `HeroService` only needs to append, so it depends on the `MessageLog`
//! trait. `MessageService` is the concrete log other consumers read from.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Append-only sink for human-readable trace lines.
pub trait MessageLog: Send + Sync {
    fn add(&self, message: String);
}

/// Clonable handle to a process-wide message list.
///
/// Clones share the same underlying list.
#[derive(Debug, Clone, Default)]
pub struct MessageService {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MessageService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the messages in insertion order.
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        // A panic mid-push cannot leave the Vec inconsistent.
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MessageLog for MessageService {
    fn add(&self, message: String) {
        self.lock().push(message);
    }
}
