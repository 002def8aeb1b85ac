//! Persisted format of the rename configuration.
//!
//! Keeping the encoding in one place means the host crate never calls
//! `serde_json` directly for configuration documents.

pub mod json;
