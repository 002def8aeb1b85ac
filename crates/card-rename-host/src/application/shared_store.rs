//! SharedConfigStore: thread-safe access to a [`ConfigStore`].
//!
//! `ConfigStore` itself assumes a single caller.  Hosts that resolve names on
//! one thread while an admin surface edits the configuration on another wrap
//! the store in this type:
//!
//! - every load, save, and mutation runs while holding one mutex, file write
//!   included, so writers are serialised;
//! - [`SharedConfigStore::snapshot`] clones the current configuration under a
//!   short-held lock, and resolution then runs against the snapshot without
//!   holding the lock at all.
//!
//! Mutations are adopted only after a successful write, so the store is
//! consistent between operations and a poisoned lock is recovered.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use card_rename_core::{apply_name, AppliedResult, CardRef, Configuration};

use super::config_store::{ConfigRepository, ConfigStore};

/// Cloneable, thread-safe handle to a [`ConfigStore`].
pub struct SharedConfigStore<R> {
    inner: Arc<Mutex<ConfigStore<R>>>,
}

impl<R> Clone for SharedConfigStore<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: ConfigRepository> SharedConfigStore<R> {
    pub fn new(store: ConfigStore<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Returns an immutable copy of the current configuration.
    pub fn snapshot(&self) -> Arc<Configuration> {
        Arc::new(self.lock().current().clone())
    }

    /// Runs `f` with exclusive access to the store.
    ///
    /// Use this for every mutation (`set_rename`, `reload`, ...).
    pub fn with_store<T>(&self, f: impl FnOnce(&mut ConfigStore<R>) -> T) -> T {
        let mut guard = self.lock();
        f(&mut *guard)
    }

    /// Resolves `card` against a fresh snapshot.
    pub fn apply_name(&self, card: CardRef<'_>) -> AppliedResult {
        let snapshot = self.snapshot();
        apply_name(&snapshot, card)
    }

    fn lock(&self) -> MutexGuard<'_, ConfigStore<R>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
