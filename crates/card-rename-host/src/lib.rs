//! card-rename-host library entry point.
//!
//! Everything a host process needs around the pure engine in
//! `card_rename_core`: the persistent [`ConfigStore`], the binding that
//! commits names to host card objects, a JSON file repository, and a debug
//! console.  Integration tests in `tests/` and the console binary in
//! `main.rs` share this module tree.
//!
//! # Wiring a host (for beginners)
//!
//! ```no_run
//! use card_rename_host::application::config_store::ConfigStore;
//! use card_rename_host::application::host_binding::{commit_name, NamedEntity};
//! use card_rename_host::infrastructure::storage::JsonFileRepository;
//!
//! fn on_card_created(store: &ConfigStore<JsonFileRepository>, card: &mut impl NamedEntity) {
//!     commit_name(store.current(), card);
//! }
//!
//! // Once at process start, with a directory the host owns:
//! let store = ConfigStore::open(JsonFileRepository::in_dir("/path/to/mod/config"));
//! # let _ = store;
//! ```

pub mod application;
pub mod infrastructure;

pub use application::config_store::{ConfigRepository, ConfigStore, LoadSource, StoreError};
pub use application::host_binding::{commit_name, NamedEntity};
pub use application::shared_store::SharedConfigStore;
