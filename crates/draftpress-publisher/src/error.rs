//! Publish pipeline errors.

use std::path::PathBuf;

use thiserror::Error;

use draftpress_notion::NotionError;

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a file path: {0}")]
    InvalidPath(PathBuf),

    #[error(transparent)]
    Notion(#[from] NotionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notion_error_passes_through() {
        let err = PublishError::from(NotionError::Api {
            status: 500,
            body: "server error".to_string(),
        });
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_invalid_path_display() {
        let err = PublishError::InvalidPath(PathBuf::from(".."));
        assert!(err.to_string().contains("not a file path"));
    }
}
