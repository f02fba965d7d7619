//! Publish pipeline implementation.

#[cfg(test)]
#[path = "publisher_tests.rs"]
mod tests;

use std::path::{Path, PathBuf};

use tracing::{error, info};

use draftpress_core::{paths, status, DraftParser};
use draftpress_notion::NotionClient;

use crate::error::PublishError;

/// Outcome of one publisher run.
///
/// Skips are normal outcomes, not errors; the exit code keeps them
/// distinguishable from a successful publish for the watcher.
#[derive(Debug)]
pub enum PublishOutcome {
    /// Page created; the source file was moved to `archived_to`.
    Published { archived_to: PathBuf },
    /// The file is not a valid front-matter document.
    SkippedInvalidFormat,
    /// The publish flag is false or absent.
    SkippedUnpublished,
}

impl PublishOutcome {
    /// Process exit code reported to the watcher: 0 published, 2 skipped.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Published { .. } => status::EXIT_PUBLISHED,
            Self::SkippedInvalidFormat | Self::SkippedUnpublished => status::EXIT_SKIPPED,
        }
    }
}

/// Publishes one draft file to Notion and archives it.
pub struct Publisher {
    notion: NotionClient,
    vault_folder: PathBuf,
    archive_from: String,
    archive_to: String,
}

impl Publisher {
    pub fn new(
        notion: NotionClient,
        vault_folder: impl Into<PathBuf>,
        archive_from: impl Into<String>,
        archive_to: impl Into<String>,
    ) -> Self {
        Self {
            notion,
            vault_folder: vault_folder.into(),
            archive_from: archive_from.into(),
            archive_to: archive_to.into(),
        }
    }

    /// Run the pipeline for one file.
    pub async fn run(&self, path: &Path) -> Result<PublishOutcome, PublishError> {
        let content = tokio::fs::read_to_string(path).await?;

        let draft = match DraftParser::parse(&content) {
            Ok(draft) => draft,
            Err(e) => {
                info!("skipping {}: {}", path.display(), e);
                return Ok(PublishOutcome::SkippedInvalidFormat);
            }
        };

        if !draft.front_matter.publish {
            info!("skipping {}: publish flag not set", path.display());
            return Ok(PublishOutcome::SkippedUnpublished);
        }

        let file_name = paths::original_file_name(path)
            .ok_or_else(|| PublishError::InvalidPath(path.to_path_buf()))?;
        info!("publishing {}", file_name);

        if let Err(e) = self.notion.create_page(&draft).await {
            error!("failed to publish {}: {}", file_name, e);
            return Err(e.into());
        }

        let archived_to = self.archive(path, &file_name).await?;
        info!("published {} -> {}", file_name, archived_to.display());
        Ok(PublishOutcome::Published { archived_to })
    }

    /// Move the source file into the archive folder under its original name
    /// (processing marker stripped).
    async fn archive(&self, path: &Path, file_name: &str) -> Result<PathBuf, PublishError> {
        let dir = paths::archive_dir(&self.vault_folder, &self.archive_from, &self.archive_to);
        tokio::fs::create_dir_all(&dir).await?;

        let dest = dir.join(file_name);
        tokio::fs::rename(path, &dest).await?;
        Ok(dest)
    }
}
