//! Configuration validation.

use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a loaded configuration.
    ///
    /// Errors are fatal at startup; warnings are logged and ignored.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        if config.vault_folder.as_os_str().is_empty() {
            result.errors.push("vault_folder is not set".to_string());
        }
        if config.notion.token.is_empty() {
            result.errors.push("notion.token is not set".to_string());
        }
        if config.notion.database_id.is_empty() {
            result.errors.push("notion.database_id is not set".to_string());
        }

        // Notifications are best-effort; missing credentials degrade to
        // logged send failures rather than refusing to start.
        if config.telegram.bot_token.is_empty() {
            result
                .warnings
                .push("telegram.bot_token is not set; notifications will fail".to_string());
        }
        if config.telegram.chat_id.is_empty() {
            result
                .warnings
                .push("telegram.chat_id is not set; notifications will fail".to_string());
        }

        if config.watcher.settle_delay_secs > 60 {
            result.warnings.push(format!(
                "watcher.settle_delay_secs is {}; new files will sit unlocked for that long",
                config.watcher.settle_delay_secs
            ));
        }
        if config.archive.from.is_empty() {
            result.errors.push("archive.from is empty".to_string());
        }

        result
    }
}
