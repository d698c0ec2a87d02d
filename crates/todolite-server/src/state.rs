//! Application state shared across all API handlers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use todolite_core::TaskStore;

/// Shared handle to the in-memory task store.
///
/// Each handler locks for the duration of one operation, so a request always
/// observes a consistent store; there is no cross-request transactionality.
#[derive(Clone, Default)]
pub struct AppState {
    store: Arc<Mutex<TaskStore>>,
}

impl AppState {
    /// Create state holding an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state seeded with an existing store (useful for tests).
    #[must_use]
    pub fn with_store(store: TaskStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Lock the store. A poisoned lock is recovered; the store stays usable
    /// because no handler leaves it half-mutated.
    pub fn store(&self) -> MutexGuard<'_, TaskStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
