//! Watcher errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WatcherError {
    /// Startup precondition: the watched folder must exist.
    #[error("watched folder not found: {0}")]
    VaultMissing(PathBuf),

    #[error("failed to watch folder: {0}")]
    Watch(#[from] notify::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vault_missing_display() {
        let err = WatcherError::VaultMissing(PathBuf::from("/gone/vault"));
        assert!(err.to_string().contains("/gone/vault"));
        assert!(err.to_string().contains("not found"));
    }
}
