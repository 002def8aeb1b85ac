//! In-memory repository for tests.
//!
//! Lets tests exercise `ConfigStore` without touching the file system, and
//! inject read or write failures on demand.  Clones share the same state, so a
//! test can keep a handle after moving one clone into the store.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::application::config_store::{ConfigRepository, StoreError};

#[derive(Debug, Default)]
struct MemoryState {
    contents: Option<Vec<u8>>,
    fail_reads: bool,
    fail_writes: bool,
    write_count: u32,
}

/// A [`ConfigRepository`] holding the document in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    state: Arc<Mutex<MemoryState>>,
}

impl InMemoryRepository {
    /// Creates an empty repository (as on first run).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository that already holds `contents`.
    pub fn with_contents(contents: &str) -> Self {
        let repo = Self::new();
        repo.lock().contents = Some(contents.as_bytes().to_vec());
        repo
    }

    /// Returns the stored document as text, if any.
    pub fn contents(&self) -> Option<String> {
        self.lock()
            .contents
            .as_ref()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> u32 {
        self.lock().write_count
    }

    /// Makes subsequent reads fail with an I/O error.
    pub fn set_fail_reads(&self, fail: bool) {
        self.lock().fail_reads = fail;
    }

    /// Makes subsequent writes fail with an I/O error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    /// A test that panicked mid-write leaves the state usable.
    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn injected_error(kind: ErrorKind) -> StoreError {
        StoreError::Io {
            path: PathBuf::from("memory://card_renames.json"),
            source: std::io::Error::new(kind, "injected failure"),
        }
    }
}

impl ConfigRepository for InMemoryRepository {
    fn read(&self) -> Result<Option<Vec<u8>>, StoreError> {
        let state = self.lock();
        if state.fail_reads {
            return Err(Self::injected_error(ErrorKind::PermissionDenied));
        }
        Ok(state.contents.clone())
    }

    fn write(&self, contents: &str) -> Result<(), StoreError> {
        let mut state = self.lock();
        if state.fail_writes {
            return Err(Self::injected_error(ErrorKind::Other));
        }
        state.contents = Some(contents.as_bytes().to_vec());
        state.write_count += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory://card_renames.json".to_string()
    }
}
