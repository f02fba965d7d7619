//! Configuration loader.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::schema::Config;

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let mut config: Config = serde_yml::from_str(&expanded)?;
        config.vault_folder = Self::expand_path(&config.vault_folder);
        config.log_dir = Self::expand_path(&config.log_dir);
        if let Some(bin) = config.watcher.publisher_bin.take() {
            config.watcher.publisher_bin = Some(Self::expand_path(&bin));
        }
        Ok(config)
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let mut result = content.to_string();
        let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/vault`).
    pub fn expand_path(path: &Path) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_minimal_config() {
        let config = ConfigLoader::load_str("{}").unwrap();
        assert_eq!(config.watcher.settle_delay_secs, 2);
        assert_eq!(config.archive.from, "template");
    }

    #[test]
    fn test_load_basic_config() {
        let content = r#"
vault_folder: /data/vault/template
notion:
  token: secret-token
  database_id: db-123
telegram:
  bot_token: bot-token
  chat_id: "42"
"#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.vault_folder.to_string_lossy(), "/data/vault/template");
        assert_eq!(config.notion.token, "secret-token");
        assert_eq!(config.notion.database_id, "db-123");
        assert_eq!(config.telegram.chat_id, "42");
    }

    #[test]
    fn test_load_overrides_defaults() {
        let content = r#"
vault_folder: /v
archive:
  from: drafts
  to: published
watcher:
  settle_delay_secs: 5
  publisher_bin: /usr/local/bin/draftpress
"#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.archive.from, "drafts");
        assert_eq!(config.archive.to, "published");
        assert_eq!(config.watcher.settle_delay_secs, 5);
        assert_eq!(
            config.watcher.publisher_bin,
            Some(PathBuf::from("/usr/local/bin/draftpress"))
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "vault_folder: /tmp/vault").unwrap();
        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.vault_folder, PathBuf::from("/tmp/vault"));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load(Path::new("/nonexistent/path/config.yaml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let result = ConfigLoader::load_str("vault_folder: [unclosed");
        assert!(matches!(result, Err(ConfigError::YamlParse(_))));
    }

    #[test]
    fn test_expand_env_vars() {
        std::env::set_var("DRAFTPRESS_TEST_TOKEN", "tok-abc");
        let config = ConfigLoader::load_str("notion:\n  token: ${DRAFTPRESS_TEST_TOKEN}").unwrap();
        assert_eq!(config.notion.token, "tok-abc");
        std::env::remove_var("DRAFTPRESS_TEST_TOKEN");
    }

    #[test]
    fn test_expand_env_vars_not_set() {
        let result = ConfigLoader::load_str("notion:\n  token: ${DRAFTPRESS_UNSET_VAR_99}");
        assert!(matches!(result, Err(ConfigError::EnvVarNotSet(_))));
    }

    #[test]
    fn test_expand_tilde_in_vault_path() {
        let config = ConfigLoader::load_str("vault_folder: ~/vault").unwrap();
        assert!(!config.vault_folder.to_string_lossy().starts_with('~'));
        assert!(config.vault_folder.to_string_lossy().ends_with("/vault"));
    }
}
