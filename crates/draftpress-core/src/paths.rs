//! Processing-marker and archive path helpers.
//!
//! The watcher locks a draft by renaming it with the processing suffix; the
//! publisher strips the suffix again when archiving. Both sides share these
//! helpers so the marker stays a single definition.

use std::path::{Path, PathBuf};

/// Suffix appended to a file name to mark it as being processed.
pub const PROCESSING_SUFFIX: &str = ".processing";

/// Path of the processing-marked variant of `path` (same directory).
pub fn processing_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(PROCESSING_SUFFIX);
    path.with_file_name(name)
}

/// File name of `path` with the processing suffix stripped, if present.
pub fn original_file_name(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    Some(
        name.strip_suffix(PROCESSING_SUFFIX)
            .unwrap_or(&name)
            .to_string(),
    )
}

/// Archive directory derived from the vault path by substituting the first
/// occurrence of the `from` segment with `to`.
///
/// If the segment does not occur, the vault path is returned unchanged.
pub fn archive_dir(vault: &Path, from: &str, to: &str) -> PathBuf {
    PathBuf::from(vault.to_string_lossy().replacen(from, to, 1))
}

/// Whether `path` names a markdown file.
pub fn is_markdown(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("md")
}
