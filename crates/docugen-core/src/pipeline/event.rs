use std::path::Path;

/// Progress notifications emitted while a pipeline runs.
#[derive(Debug, Clone, Copy)]
pub enum PipelineEvent<'a> {
    /// A numbered stage begins.
    Step { number: u8, title: &'a str },
    /// Candidate files were listed.
    FilesFound(usize),
    /// A file is being read and parsed.
    Parsing(&'a str),
    /// A file was dropped; the run continues.
    Skipped { path: &'a str, reason: &'a str },
    /// Parsing finished with this many files holding elements.
    Parsed(usize),
    /// Documentation is being requested for file `index` of `total`.
    Documenting { path: &'a str, index: usize, total: usize },
    /// Documentation finished for this many files.
    Documented(usize),
    /// A markdown file was written.
    Exported(&'a Path),
}
