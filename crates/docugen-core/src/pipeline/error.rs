use thiserror::Error;

use crate::export::ExportError;
use crate::extract::ExtractError;
use crate::github::GitHubError;
use crate::llm::LLMError;
use crate::scan::ScanError;
use crate::select::SelectionError;

/// Errors that abort a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Must specify either a target directory or a GitHub URL")]
    NoSource,

    #[error("Cannot use both a target directory and a GitHub URL")]
    ConflictingSources,

    #[error("An LLM client is required unless running extraction only")]
    MissingLLM,

    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("GitHub error: {0}")]
    GitHub(#[from] GitHubError),

    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),

    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    #[error("LLM error: {0}")]
    LLM(#[from] LLMError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}
