//! Local directory discovery.

use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use ignore::WalkBuilder;
use tracing::{debug, warn};

use crate::config::ScanConfig;

/// Errors that can occur while scanning a directory.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Directory not found: {0}")]
    NotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Collects every source file under `root` that the config admits.
///
/// Hidden entries and `.gitignore`d paths are skipped. The returned paths
/// are joined onto `root` and sorted.
pub fn scan_directory(root: impl AsRef<Path>, config: &ScanConfig) -> Result<Vec<PathBuf>, ScanError> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(ScanError::NotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let walker = WalkBuilder::new(root)
        .hidden(true)
        .git_ignore(true)
        .build();

    let mut files = Vec::new();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        let path = entry.path();

        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }

        if !config.includes(path) {
            continue;
        }

        if is_excluded(root, path, &config.exclude_dirs) {
            continue;
        }

        match entry.metadata() {
            Ok(metadata) if metadata.len() > config.max_file_size => {
                debug!(path = %path.display(), size = metadata.len(), "skipping oversized file");
                continue;
            }
            Ok(_) => {}
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping file without metadata");
                continue;
            }
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    debug!(root = %root.display(), files = files.len(), "scan complete");

    Ok(files)
}

/// Whether any directory between `root` and `path` is in the exclude list.
fn is_excluded(root: &Path, path: &Path, exclude_dirs: &[String]) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let Some(parent) = relative.parent() else {
        return false;
    };

    parent.components().any(|component| match component {
        Component::Normal(name) => exclude_dirs.iter().any(|d| name == d.as_str()),
        _ => false,
    })
}
