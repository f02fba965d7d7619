//! Notion HTTP client.

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;

use draftpress_core::Draft;

use crate::api::{CreatePageRequest, NOTION_VERSION};
use crate::error::NotionError;

const DEFAULT_BASE_URL: &str = "https://api.notion.com";

/// Client for the Notion pages API.
pub struct NotionClient {
    token: String,
    database_id: String,
    base_url: String,
    client: reqwest::Client,
}

impl NotionClient {
    pub fn new(token: impl Into<String>, database_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            database_id: database_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Override the API base URL (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Create one page in the configured database from a parsed draft.
    ///
    /// Creation is fire-and-forget: there is no update or delete lifecycle.
    pub async fn create_page(&self, draft: &Draft) -> Result<(), NotionError> {
        let request = CreatePageRequest::from_draft(&self.database_id, draft);

        let response = self
            .client
            .post(format!("{}/v1/pages", self.base_url))
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| NotionError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(NotionError::Api { status, body });
        }

        Ok(())
    }
}
