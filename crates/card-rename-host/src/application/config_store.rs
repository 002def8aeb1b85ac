//! ConfigStore: the single source of truth for rename data.
//!
//! The store owns the in-memory [`Configuration`] and keeps it in lock-step
//! with durable storage reached through a [`ConfigRepository`].
//!
//! # Lifecycle (for beginners)
//!
//! ```text
//! ConfigStore::open(repo)  ──►  Loaded  ──► reload / save / set_rename /
//!                                  ▲        remove_rename / clear_all
//!                                  └───────────────┘
//! ```
//!
//! `open` performs the first load.  What happens next depends on what the
//! repository returns:
//!
//! | Repository read        | In-memory result            | File afterwards        |
//! |------------------------|-----------------------------|------------------------|
//! | valid document         | the document                | unchanged              |
//! | nothing (first run)    | `Configuration::example()`  | example written        |
//! | malformed document     | `Configuration::example()`  | overwritten by example |
//! | I/O error              | `Configuration::default()`  | untouched              |
//!
//! None of these paths return an error to the caller: a host that cannot read
//! its rename file simply shows every card with its original name.
//!
//! # Durable mutations
//!
//! Every mutating operation builds the next configuration on a copy, writes
//! it, and only adopts it once the write succeeded.  A failed write therefore
//! leaves both the file and the in-memory state at their previous value and
//! is reported to the caller as [`StoreError`].

use std::path::PathBuf;

use card_rename_core::{
    decode_config, encode_config, BatchRule, Configuration, FormatError, RenameTable,
};
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading, writing, or creating the directory of the file failed.
    #[error("I/O error accessing rename config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document could not be encoded or decoded.
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Durable storage for the encoded rename document.
///
/// Production code uses the JSON file repository from the infrastructure
/// layer; tests use an in-memory implementation or a `mockall` mock.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigRepository {
    /// Returns the stored bytes, or `None` if nothing has been stored yet.
    fn read(&self) -> Result<Option<Vec<u8>>, StoreError>;
    /// Replaces the stored document with `contents`.
    fn write(&self, contents: &str) -> Result<(), StoreError>;
    /// Human-readable location of the document (usually a file path).
    fn location(&self) -> String;
}

/// Where the current in-memory configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Parsed from an existing document.
    File,
    /// No document existed; the example configuration was generated.
    CreatedDefault,
    /// The document was malformed and has been replaced by the example.
    RecoveredFromParseError,
    /// Storage was unusable; running with an empty configuration.
    Degraded,
}

/// Owns the rename configuration and persists every change immediately.
///
/// There is no internal locking: all methods are expected to be called from
/// a single thread.  Wrap the store in
/// [`SharedConfigStore`](super::shared_store::SharedConfigStore) for hosts
/// that call it from several threads.
pub struct ConfigStore<R> {
    repository: R,
    config: Configuration,
    load_source: LoadSource,
}

impl<R: ConfigRepository> ConfigStore<R> {
    /// Opens the store and performs the initial load.
    pub fn open(repository: R) -> Self {
        let mut store = Self {
            repository,
            config: Configuration::default(),
            load_source: LoadSource::Degraded,
        };
        store.load();
        store
    }

    /// Loads the configuration from the repository, replacing in-memory state.
    ///
    /// Never fails; see the module documentation for the fallback table.
    pub fn load(&mut self) -> &Configuration {
        let location = self.repository.location();
        info!("loading rename configuration from {location}");

        let (config, source) = match self.repository.read() {
            Ok(Some(bytes)) => match decode_config(&bytes) {
                Ok(config) => (config, LoadSource::File),
                Err(e) => {
                    warn!("{e}; replacing {location} with the default configuration");
                    (self.write_example(), LoadSource::RecoveredFromParseError)
                }
            },
            Ok(None) => {
                info!("no rename configuration found, creating default at {location}");
                (self.write_example(), LoadSource::CreatedDefault)
            }
            Err(e) => {
                error!("failed to load rename configuration: {e}; custom names are disabled");
                (Configuration::default(), LoadSource::Degraded)
            }
        };

        log_summary(&config);
        self.config = config;
        self.load_source = source;
        &self.config
    }

    /// Discards in-memory state and loads again from the repository.
    pub fn reload(&mut self) -> &Configuration {
        info!("reloading rename configuration");
        self.load()
    }

    /// Writes `config` to the repository and adopts it as the current state.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if encoding or writing fails.  The previous
    /// state stays in place, both in memory and on disk.
    pub fn save(&mut self, config: Configuration) -> Result<(), StoreError> {
        match self.write(&config) {
            Ok(()) => {
                info!("rename configuration saved to {}", self.repository.location());
                self.config = config;
                Ok(())
            }
            Err(e) => {
                error!("failed to save rename configuration: {e}");
                Err(e)
            }
        }
    }

    /// Sets the override for `key` (a card ID or an original name).
    ///
    /// An absent or blank `name` removes the entry instead.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the change could not be persisted.
    pub fn set_rename(&mut self, key: &str, name: Option<&str>) -> Result<(), StoreError> {
        let Some(name) = name.filter(|n| !n.trim().is_empty()) else {
            return self.remove_rename(key);
        };

        let mut next = self.config.clone();
        next.renames.insert(key, name);
        self.save(next)?;
        info!("set rename: {key} -> {name}");
        Ok(())
    }

    /// Removes the override for `key`.  Removing an absent key is a no-op and
    /// does not touch storage.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the change could not be persisted.
    pub fn remove_rename(&mut self, key: &str) -> Result<(), StoreError> {
        if !self.config.renames.contains_key(key) {
            return Ok(());
        }

        let mut next = self.config.clone();
        next.renames.remove(key);
        self.save(next)?;
        info!("removed rename: {key}");
        Ok(())
    }

    /// Removes every override.  The batch rule is kept.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the change could not be persisted.
    pub fn clear_all(&mut self) -> Result<(), StoreError> {
        let mut next = self.config.clone();
        next.renames.clear();
        self.save(next)?;
        info!("cleared all renames");
        Ok(())
    }

    /// Replaces the batch rule.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the change could not be persisted.
    pub fn set_batch_rule(&mut self, rule: BatchRule) -> Result<(), StoreError> {
        let mut next = self.config.clone();
        next.batch_rule = rule;
        self.save(next)?;
        info!(
            "batch rule {} (prefix {:?}, suffix {:?})",
            if self.config.batch_rule.enabled { "enabled" } else { "disabled" },
            self.config.batch_rule.prefix,
            self.config.batch_rule.suffix
        );
        Ok(())
    }

    /// The configuration used for name resolution.
    pub fn current(&self) -> &Configuration {
        &self.config
    }

    /// Returns an owned copy of every rename entry.
    pub fn all_renames(&self) -> RenameTable {
        self.config.renames.clone()
    }

    /// Looks up the entry stored under `key` without any fallback.
    pub fn rename_for(&self, key: &str) -> Option<String> {
        self.config.renames.get(key).map(str::to_string)
    }

    /// Returns a copy of the batch rule.
    pub fn batch_rule(&self) -> BatchRule {
        self.config.batch_rule.clone()
    }

    /// Where the configuration is stored, for display to users.
    pub fn location(&self) -> String {
        self.repository.location()
    }

    /// How the current configuration was obtained by the last load.
    pub fn load_source(&self) -> LoadSource {
        self.load_source
    }

    fn write(&self, config: &Configuration) -> Result<(), StoreError> {
        let text = encode_config(config)?;
        self.repository.write(&text)
    }

    /// Writes the example configuration and returns it.  A write failure is
    /// logged; the example is still used in memory.
    fn write_example(&self) -> Configuration {
        let config = Configuration::example();
        if let Err(e) = self.write(&config) {
            error!("failed to write default rename configuration: {e}");
        }
        config
    }
}

fn log_summary(config: &Configuration) {
    let rule = &config.batch_rule;
    if rule.enabled {
        info!(
            "batch rule enabled (prefix {:?}, suffix {:?})",
            rule.prefix, rule.suffix
        );
    } else {
        info!("batch rule disabled");
    }
    info!("loaded {} card rename(s)", config.renames.len());
    for (key, name) in config.renames.iter() {
        debug!("  {key} -> {name}");
    }
}
