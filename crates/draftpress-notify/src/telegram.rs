//! Telegram notification channel.

#[cfg(test)]
#[path = "telegram_tests.rs"]
mod tests;

use std::time::Duration;

use async_trait::async_trait;

use crate::error::NotifyError;
use crate::Notifier;

const DEFAULT_BASE_URL: &str = "https://api.telegram.org";

/// Notifications must not stall the watcher loop, so the send has a fixed
/// short timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Sends messages to a Telegram chat via the bot API.
pub struct TelegramNotifier {
    bot_token: String,
    chat_id: String,
    base_url: String,
    client: reqwest::Client,
}

impl TelegramNotifier {
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Override the API base URL (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, text: &str) -> Result<(), NotifyError> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.bot_token);
        let params = [("chat_id", self.chat_id.as_str()), ("text", text)];

        let response = self
            .client
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .form(&params)
            .send()
            .await
            .map_err(|e| NotifyError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Api { status, body });
        }

        Ok(())
    }
}
