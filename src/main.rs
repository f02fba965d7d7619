//! Draftpress - vault-to-Notion markdown publishing pipeline.
//!
//! Main entry point for the watcher and publisher processes.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use draftpress_config::{Config, ConfigLoader, ConfigValidator};
use draftpress_core::status;
use draftpress_notify::{LogNotifier, Notifier, TelegramNotifier};
use draftpress_notion::NotionClient;
use draftpress_publisher::Publisher;
use draftpress_watcher::{VaultWatcher, WatcherSettings};

/// Draftpress CLI.
#[derive(Parser)]
#[command(name = "draftpress")]
#[command(about = "Vault-to-Notion markdown publishing pipeline")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Watch the vault folder and publish new drafts as they appear
    Watch,

    /// Publish one draft file and exit (0 published, 2 skipped, 1 failed)
    Publish {
        /// Path to the markdown file
        file: PathBuf,
    },
}

/// Initialize tracing with console and file output.
///
/// Log files are written to the configured directory with daily rotation.
/// The returned guard must stay alive so buffered lines are flushed on exit.
fn init_tracing(log_dir: &Path) -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("draftpress")
        .filename_suffix("log")
        .max_log_files(30)
        .build(log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Quiet the chatty dependencies unless RUST_LOG overrides.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,notify=warn,reqwest=warn,hyper=warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        // Console layer (human-readable text format with colors)
        .with(fmt::layer().with_target(true).with_ansi(true))
        // File layer (text format without colors)
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match ConfigLoader::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("failed to load config {}: {}", cli.config.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let _guard = match init_tracing(&config.log_dir) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("failed to initialize logging: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let validation = ConfigValidator::validate(&config);
    for warning in &validation.warnings {
        warn!("config: {}", warning);
    }
    if !validation.is_valid() {
        for err in &validation.errors {
            error!("config: {}", err);
        }
        error!("invalid configuration: {}", cli.config.display());
        return ExitCode::FAILURE;
    }

    let code = match cli.command {
        Commands::Watch => run_watcher(cli.config, config).await,
        Commands::Publish { file } => run_publisher(config, &file).await,
    };
    ExitCode::from(code)
}

/// Run the watcher loop until interrupted.
async fn run_watcher(config_path: PathBuf, config: Config) -> u8 {
    info!("Starting draftpress v{}", env!("CARGO_PKG_VERSION"));

    let notifier = build_notifier(&config);
    let settings = WatcherSettings {
        vault_folder: config.vault_folder.clone(),
        settle_delay: Duration::from_secs(config.watcher.settle_delay_secs),
        publisher_bin: config.watcher.publisher_bin.clone(),
        config_path,
    };

    let mut watcher = VaultWatcher::new(settings, notifier);
    if let Err(e) = watcher.run().await {
        error!("fatal: {}", e);
        return 1;
    }

    info!("Shutting down...");
    0
}

/// Run the publisher once for a single file.
async fn run_publisher(config: Config, file: &Path) -> u8 {
    let notion = NotionClient::new(
        config.notion.token.clone(),
        config.notion.database_id.clone(),
    )
    .with_base_url(config.notion.api_url.clone());

    let publisher = Publisher::new(
        notion,
        config.vault_folder.clone(),
        config.archive.from.clone(),
        config.archive.to.clone(),
    );

    match publisher.run(file).await {
        Ok(outcome) => outcome.exit_code() as u8,
        Err(e) => {
            error!("publish failed for {}: {}", file.display(), e);
            status::EXIT_FAILURE as u8
        }
    }
}

/// Telegram when configured, otherwise log-only notifications.
fn build_notifier(config: &Config) -> Arc<dyn Notifier> {
    if config.telegram.bot_token.is_empty() || config.telegram.chat_id.is_empty() {
        warn!("Telegram not configured; notifications go to the log only");
        return Arc::new(LogNotifier);
    }
    Arc::new(
        TelegramNotifier::new(
            config.telegram.bot_token.clone(),
            config.telegram.chat_id.clone(),
        )
        .with_base_url(config.telegram.api_url.clone()),
    )
}
