//! Extraction error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while extracting elements from a file.
///
/// Pattern mismatches are never errors; only reading the file can fail.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExtractError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtractError::Io {
            path: path.into(),
            source,
        }
    }
}
