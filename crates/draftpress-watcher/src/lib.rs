//! Vault folder watcher.
//!
//! Observes one directory (non-recursive) for newly created markdown drafts
//! and drives each through the process-once workflow: de-duplicate, settle,
//! lock by rename, publish via subprocess, notify.

pub mod error;
pub mod processed;
pub mod watcher;

pub use error::WatcherError;
pub use processed::ProcessedSet;
pub use watcher::{VaultWatcher, WatcherSettings};
