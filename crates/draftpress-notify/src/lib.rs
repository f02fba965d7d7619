//! Outcome notifications.
//!
//! Notifications are best-effort: senders log failures and never let them
//! affect the publish outcome.

pub mod error;
pub mod telegram;

pub use error::NotifyError;
pub use telegram::TelegramNotifier;

use async_trait::async_trait;

/// A channel that can deliver a short outcome message.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, text: &str) -> Result<(), NotifyError>;
}

/// Fallback channel that writes the message to the log.
///
/// Used when Telegram credentials are not configured.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, text: &str) -> Result<(), NotifyError> {
        tracing::info!("notification: {}", text);
        Ok(())
    }
}
