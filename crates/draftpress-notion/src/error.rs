//! Notion API errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotionError {
    /// Transport-level failure before a response was received.
    #[error("Notion request failed: {0}")]
    Network(String),

    /// Non-2xx response; `body` carries the response text for the log.
    #[error("Notion API error (status {status}): {body}")]
    Api { status: u16, body: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = NotionError::Api {
            status: 400,
            body: "validation_error".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("400"));
        assert!(display.contains("validation_error"));
    }

    #[test]
    fn test_network_error_display() {
        let err = NotionError::Network("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));
    }
}
