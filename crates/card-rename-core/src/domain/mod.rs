//! Domain entities for card renaming.
//!
//! Everything in this module is plain data plus pure functions: no I/O, no
//! global state, no logging.  That keeps the precedence rules trivially unit
//! testable and lets a host call them from any lifecycle hook without fear of
//! side effects.

/// Persisted configuration model: batch rule and rename table.
pub mod config;

/// Precedence rules and keyword detection.
///
/// See [`resolver::resolve`] for the main entry point.
pub mod resolver;
