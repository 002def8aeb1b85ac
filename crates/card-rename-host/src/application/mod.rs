//! Application layer use cases for hosts embedding the rename engine.
//!
//! Use cases in this layer depend on the `ConfigRepository` abstraction
//! rather than on the file system, so they can be tested without touching
//! disk.
//!
//! # Sub-modules
//!
//! - **`config_store`**  – Loads, saves, and mutates the rename configuration.
//!   Every mutation is persisted before it becomes visible.
//!
//! - **`shared_store`**  – Mutex wrapper around `ConfigStore` for hosts that
//!   call into the engine from more than one thread.
//!
//! - **`host_binding`**  – The contract between a host's card objects and the
//!   resolver: resolve, commit the name, add the strike tag if needed.

pub mod config_store;
pub mod host_binding;
pub mod shared_store;
