//! # card-rename-core
//!
//! Pure rename engine shared by every host integration: the configuration
//! model, its persisted JSON format, and the rules that turn a card's
//! `(id, original_name)` into the name it should display.
//!
//! This crate has zero dependencies on the file system, the game process, or
//! a logging backend.  Hosts own the file and the card objects; they hand this
//! crate a [`Configuration`] and a [`CardRef`] and get an [`AppliedResult`]
//! back.
//!
//! # Architecture overview (for beginners)
//!
//! - **`domain`** – Business rules.  `config` defines the data model
//!   ([`BatchRule`], [`RenameTable`], [`Configuration`]); `resolver` defines
//!   the precedence rules ([`resolve`]) and the strike-keyword heuristic
//!   ([`detects_keyword`]).
//!
//! - **`format`** – How a [`Configuration`] is written to and read from text.
//!   The only supported encoding is human-editable JSON.

pub mod domain;
pub mod format;

// Re-export the most-used items so callers can write
// `card_rename_core::resolve` instead of the full module path.
pub use domain::config::{BatchRule, Configuration, RenameTable};
pub use domain::resolver::{apply_name, detects_keyword, resolve, AppliedResult, CardRef};
pub use format::json::{decode_config, encode_config, FormatError};
