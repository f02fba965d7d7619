//! Notification errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification request failed: {0}")]
    Network(String),

    #[error("notification API error (status {status}): {body}")]
    Api { status: u16, body: String },
}
