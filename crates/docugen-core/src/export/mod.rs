//! Markdown export of generated documentation.
//!
//! Every source file maps to one flat file in the output directory:
//! ```text
//! src/api/users.ts   ->  docs/src_api_users_docs.md
//! main.go            ->  docs/main_docs.md
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::config::DOCS_FILE_SUFFIX;
use crate::docs::GeneratedDoc;

/// Errors that can occur while writing documentation.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Flattens a source path into a documentation file name.
///
/// Both separators become `_` and the text after the last `.` is replaced
/// by the docs suffix. The extension is looked up after flattening, so a
/// dot in a directory name counts when the file itself has none.
pub fn export_name(file_path: &str) -> String {
    let flat = file_path.replace(['\\', '/'], "_");

    match flat.rfind('.') {
        Some(dot) if dot + 1 < flat.len() => format!("{}{}", &flat[..dot], DOCS_FILE_SUFFIX),
        _ => format!("{}{}", flat, DOCS_FILE_SUFFIX),
    }
}

/// Writes one document under `output_dir`, creating the directory first.
pub fn export_doc(doc: &GeneratedDoc, output_dir: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
    let output_dir = output_dir.as_ref();

    if !output_dir.exists() {
        fs::create_dir_all(output_dir).map_err(|e| ExportError::io(output_dir, e))?;
    }

    let path = output_dir.join(export_name(&doc.file_path));
    fs::write(&path, &doc.documentation).map_err(|e| ExportError::io(&path, e))?;

    debug!(source = %doc.file_path, path = %path.display(), "exported documentation");

    Ok(path)
}
