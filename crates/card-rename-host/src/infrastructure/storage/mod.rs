//! Storage infrastructure: rename file persistence.
//!
//! - `json_file` – [`ConfigRepository`](crate::application::config_store::ConfigRepository)
//!   backed by a single JSON file, written atomically.
//! - `paths`     – Default per-platform directory for that file.
//! - `mock`      – In-memory repository with failure injection for tests.

pub mod json_file;
pub mod mock;
pub mod paths;

pub use json_file::JsonFileRepository;
pub use paths::CONFIG_FILE_NAME;
