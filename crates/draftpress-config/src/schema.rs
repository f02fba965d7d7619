//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Watched vault folder containing incoming drafts.
    #[serde(default)]
    pub vault_folder: PathBuf,

    /// Directory for log file output.
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,

    #[serde(default)]
    pub archive: ArchiveConfig,

    #[serde(default)]
    pub notion: NotionConfig,

    #[serde(default)]
    pub telegram: TelegramConfig,

    #[serde(default)]
    pub watcher: WatcherConfig,
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("log")
}

/// Archive folder derivation: the first occurrence of `from` in the vault
/// path is substituted with `to`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveConfig {
    #[serde(default = "default_archive_from")]
    pub from: String,

    #[serde(default = "default_archive_to")]
    pub to: String,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            from: default_archive_from(),
            to: default_archive_to(),
        }
    }
}

fn default_archive_from() -> String {
    "template".to_string()
}

fn default_archive_to() -> String {
    "legal".to_string()
}

/// Notion API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotionConfig {
    /// Integration bearer token.
    #[serde(default)]
    pub token: String,

    /// Target database id.
    #[serde(default)]
    pub database_id: String,

    /// API base URL, overridable for tests.
    #[serde(default = "default_notion_api_url")]
    pub api_url: String,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            database_id: String::new(),
            api_url: default_notion_api_url(),
        }
    }
}

fn default_notion_api_url() -> String {
    "https://api.notion.com".to_string()
}

/// Telegram notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    #[serde(default)]
    pub bot_token: String,

    #[serde(default)]
    pub chat_id: String,

    /// API base URL, overridable for tests.
    #[serde(default = "default_telegram_api_url")]
    pub api_url: String,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            chat_id: String::new(),
            api_url: default_telegram_api_url(),
        }
    }
}

fn default_telegram_api_url() -> String {
    "https://api.telegram.org".to_string()
}

/// Watcher behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatcherConfig {
    /// Delay between a creation event and the lock rename, giving the
    /// writer time to finish flushing.
    #[serde(default = "default_settle_delay")]
    pub settle_delay_secs: u64,

    /// Publisher executable. Defaults to the current executable invoked
    /// with the `publish` subcommand.
    #[serde(default)]
    pub publisher_bin: Option<PathBuf>,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            settle_delay_secs: default_settle_delay(),
            publisher_bin: None,
        }
    }
}

fn default_settle_delay() -> u64 {
    2
}
