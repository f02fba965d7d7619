//! Vault watcher implementation.

#[cfg(test)]
#[path = "watcher_tests.rs"]
mod tests;

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::process::Command;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use draftpress_core::{paths, status};
use draftpress_notify::Notifier;

use crate::error::WatcherError;
use crate::processed::ProcessedSet;

/// Handled-path memory bound; see [`ProcessedSet`].
const PROCESSED_CAPACITY: usize = 1024;

/// Watcher runtime settings, built from the loaded configuration.
#[derive(Debug, Clone)]
pub struct WatcherSettings {
    /// Watched folder containing incoming drafts.
    pub vault_folder: PathBuf,
    /// Delay between a creation event and the lock rename.
    pub settle_delay: Duration,
    /// Publisher executable; `None` means the current executable. Invoked as
    /// `<bin> publish <file> --config <path>`.
    pub publisher_bin: Option<PathBuf>,
    /// Config file path forwarded to the publisher subprocess.
    pub config_path: PathBuf,
}

/// Watches the vault folder and drives each new draft through the
/// process-once workflow.
pub struct VaultWatcher {
    settings: WatcherSettings,
    notifier: Arc<dyn Notifier>,
    processed: ProcessedSet,
}

impl VaultWatcher {
    pub fn new(settings: WatcherSettings, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            settings,
            notifier,
            processed: ProcessedSet::new(PROCESSED_CAPACITY),
        }
    }

    /// Run until Ctrl-C.
    ///
    /// Events are handled to completion one at a time, including the blocking
    /// subprocess call, so publishes never overlap.
    pub async fn run(&mut self) -> Result<(), WatcherError> {
        let vault = self.settings.vault_folder.clone();
        if !vault.is_dir() {
            return Err(WatcherError::VaultMissing(vault));
        }

        let (event_tx, mut event_rx) = mpsc::channel::<notify::Result<Event>>(100);
        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = event_tx.blocking_send(res);
            },
            Config::default().with_poll_interval(Duration::from_secs(1)),
        )?;
        watcher.watch(&vault, RecursiveMode::NonRecursive)?;
        info!("watching folder: {}", vault.display());

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("interrupt received, stopping watcher");
                    break;
                }
                Some(result) = event_rx.recv() => {
                    match result {
                        Ok(event) => self.handle_event(event).await,
                        Err(e) => error!("watch error: {}", e),
                    }
                }
            }
        }

        Ok(())
    }

    /// Handle one filesystem event: filter, de-duplicate, process.
    async fn handle_event(&mut self, event: Event) {
        if !matches!(event.kind, EventKind::Create(_)) {
            return;
        }

        for path in event.paths {
            if path.is_dir() || !paths::is_markdown(&path) {
                continue;
            }
            if !self.processed.insert(path.clone()) {
                debug!("already handled, ignoring: {}", path.display());
                continue;
            }
            self.process(&path).await;
        }
    }

    /// Process one newly created draft.
    async fn process(&self, path: &Path) {
        // Let the writer finish flushing before taking the file. Heuristic,
        // not a correctness guarantee.
        tokio::time::sleep(self.settings.settle_delay).await;

        let processing = paths::processing_path(path);
        if let Err(e) = std::fs::rename(path, &processing) {
            warn!("failed to lock {}: {}", path.display(), e);
            return;
        }
        info!("locked {}", processing.display());

        let file_name = paths::original_file_name(path)
            .unwrap_or_else(|| path.display().to_string());

        match self.invoke_publisher(&processing).await {
            Ok((code, output)) if code == status::EXIT_PUBLISHED => {
                info!("published to Notion: {}", file_name);
                if !output.is_empty() {
                    debug!("publisher output:\n{}", output);
                }
                self.send_notification(&format!("✅ Published to Notion: {}", file_name))
                    .await;
            }
            Ok((code, _)) if code == status::EXIT_SKIPPED => {
                info!("skipped by publisher: {}", file_name);
            }
            Ok((code, output)) => {
                error!(
                    "publisher exited with code {} for {}\n{}",
                    code, file_name, output
                );
                self.send_notification(&format!("❌ Failed to publish to Notion: {}", file_name))
                    .await;
            }
            Err(e) => {
                error!("failed to run publisher for {}: {}", file_name, e);
                self.send_notification(&format!("❌ Failed to publish to Notion: {}", file_name))
                    .await;
            }
        }
    }

    /// Run the publisher subprocess synchronously, capturing output.
    ///
    /// No timeout: a hung publisher holds the loop, matching the one-at-a-time
    /// processing contract.
    async fn invoke_publisher(&self, processing: &Path) -> std::io::Result<(i32, String)> {
        let program = match &self.settings.publisher_bin {
            Some(bin) => bin.clone(),
            None => std::env::current_exe()?,
        };

        let output = Command::new(program)
            .arg("publish")
            .arg(processing)
            .arg("--config")
            .arg(&self.settings.config_path)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.is_empty() {
            if !combined.is_empty() {
                combined.push('\n');
            }
            combined.push_str(&stderr);
        }

        Ok((output.status.code().unwrap_or(-1), combined))
    }

    /// Best-effort notification; failures are logged and dropped.
    async fn send_notification(&self, text: &str) {
        if let Err(e) = self.notifier.notify(text).await {
            error!("failed to send notification: {}", e);
        }
    }
}
