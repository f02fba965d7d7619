//! Configuration management for draftpress.
//!
//! Configuration is loaded once at startup into an explicit [`Config`] value
//! and passed to each component; nothing reads ambient global state.

pub mod error;
pub mod loader;
pub mod schema;
pub mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::{ArchiveConfig, Config, NotionConfig, TelegramConfig, WatcherConfig};
pub use validator::{ConfigValidator, ValidationResult};
