//! Infrastructure layer for hosts embedding the rename engine.
//!
//! Contains OS-facing adapters: the JSON file repository, platform directory
//! lookup, and the text command surface used by debug consoles.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `card_rename_core`, but MUST NOT be imported by the `application` layer.

pub mod console;
pub mod storage;
