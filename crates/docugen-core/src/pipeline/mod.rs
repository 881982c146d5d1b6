//! End-to-end run: collect files, extract elements, document, export.
//!
//! ```text
//! Source::Local  --scan-->  paths  --parse_file-->   ParseResult --+
//! Source::GitHub --tree--> select --fetch+parse_source-->          |
//!                                                                  v
//!                             export_doc <-- DocGenerator::generate
//! ```
//!
//! Per-file failures (unreadable file, failed fetch, LLM error, write
//! error) are logged and the file is skipped. Only failures that make the
//! whole run meaningless, such as a missing directory or an unreachable
//! repository, abort it.

mod error;
mod event;

pub use error::PipelineError;
pub use event::PipelineEvent;

use std::io;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::Config;
use crate::docs::{DocGenerator, GeneratedDoc};
use crate::export::export_doc;
use crate::extract::{parse_file, parse_source, ParseResult};
use crate::github::{parse_github_url, GitHubClient, GitHubError, RepoRef};
use crate::llm::LLM;
use crate::scan::scan_directory;
use crate::select::{select_files, SelectionError};

/// Where the source files come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A directory on disk.
    Local(PathBuf),
    /// A GitHub repository URL.
    GitHub(String),
}

impl Source {
    /// Resolves the two mutually exclusive command-line inputs.
    pub fn from_args(target: Option<PathBuf>, github: Option<String>) -> Result<Self, PipelineError> {
        match (target, github) {
            (Some(_), Some(_)) => Err(PipelineError::ConflictingSources),
            (Some(dir), None) => Ok(Source::Local(dir)),
            (None, Some(url)) => Ok(Source::GitHub(url)),
            (None, None) => Err(PipelineError::NoSource),
        }
    }
}

/// Options for one run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub source: Source,
    pub output_dir: PathBuf,
    /// Document every remote file instead of prompting.
    pub select_all: bool,
    /// Stop after extraction; no LLM is needed.
    pub extract_only: bool,
}

/// Outcome of a run.
#[derive(Debug, Default)]
pub struct PipelineReport {
    /// Candidate files listed by the scan or the repository tree.
    pub files_found: usize,
    /// Files that yielded at least one element.
    pub parsed: Vec<ParseResult>,
    /// Files for which documentation was generated.
    pub documented: usize,
    /// Paths of the markdown files written.
    pub exported: Vec<PathBuf>,
}

impl PipelineReport {
    pub fn files_parsed(&self) -> usize {
        self.parsed.len()
    }
}

type Reporter = Box<dyn Fn(&PipelineEvent<'_>) + Send + Sync>;

/// Files chosen for a run, before any content is read.
enum Collected {
    Local(Vec<PathBuf>),
    Remote { repo: RepoRef, paths: Vec<String> },
}

impl Collected {
    fn len(&self) -> usize {
        match self {
            Collected::Local(paths) => paths.len(),
            Collected::Remote { paths, .. } => paths.len(),
        }
    }
}

/// Drives a documentation run.
pub struct Pipeline {
    config: Config,
    github: GitHubClient,
    reporter: Option<Reporter>,
}

impl Pipeline {
    /// Creates a pipeline using the `[scan]` and `[github]` config sections.
    pub fn new(config: Config) -> Self {
        let github = GitHubClient::from_config(&config.github);
        Self {
            config,
            github,
            reporter: None,
        }
    }

    /// Replaces the GitHub client.
    pub fn with_github_client(mut self, client: GitHubClient) -> Self {
        self.github = client;
        self
    }

    /// Registers a callback receiving progress events in order.
    pub fn with_reporter<F>(mut self, reporter: F) -> Self
    where
        F: Fn(&PipelineEvent<'_>) + Send + Sync + 'static,
    {
        self.reporter = Some(Box::new(reporter));
        self
    }

    fn emit(&self, event: PipelineEvent<'_>) {
        if let Some(reporter) = &self.reporter {
            reporter(&event);
        }
    }

    /// Runs the pipeline.
    ///
    /// `llm` may be `None` only when `options.extract_only` is set.
    pub async fn run(
        &self,
        options: &PipelineOptions,
        llm: Option<&dyn LLM>,
    ) -> Result<PipelineReport, PipelineError> {
        if !options.extract_only && llm.is_none() {
            return Err(PipelineError::MissingLLM);
        }

        let mut report = PipelineReport::default();

        // 1. Collect
        let collected = self.collect(options).await?;
        report.files_found = collected.len();
        self.emit(PipelineEvent::FilesFound(report.files_found));

        if report.files_found == 0 {
            info!("no files to process");
            return Ok(report);
        }

        // 2. Parse
        self.emit(PipelineEvent::Step { number: 2, title: "Parsing code files" });
        report.parsed = self.parse(collected).await;
        self.emit(PipelineEvent::Parsed(report.parsed.len()));

        if options.extract_only || report.parsed.is_empty() {
            return Ok(report);
        }

        let Some(llm) = llm else {
            return Err(PipelineError::MissingLLM);
        };

        // 3. Document
        self.emit(PipelineEvent::Step { number: 3, title: "Generating documentation" });
        let docs = self.document(&report.parsed, llm).await;
        report.documented = docs.len();
        self.emit(PipelineEvent::Documented(report.documented));

        // 4. Export
        self.emit(PipelineEvent::Step { number: 4, title: "Exporting documentation" });
        for doc in &docs {
            match export_doc(doc, &options.output_dir) {
                Ok(path) => {
                    self.emit(PipelineEvent::Exported(&path));
                    report.exported.push(path);
                }
                Err(e) => {
                    warn!(path = %doc.file_path, error = %e, "export failed");
                    self.emit(PipelineEvent::Skipped {
                        path: &doc.file_path,
                        reason: "export failed",
                    });
                }
            }
        }

        info!(
            found = report.files_found,
            parsed = report.parsed.len(),
            documented = report.documented,
            exported = report.exported.len(),
            "pipeline finished"
        );

        Ok(report)
    }

    async fn collect(&self, options: &PipelineOptions) -> Result<Collected, PipelineError> {
        match &options.source {
            Source::Local(dir) => {
                self.emit(PipelineEvent::Step { number: 1, title: "Scanning directory" });
                let files = scan_directory(dir, &self.config.scan)?;
                Ok(Collected::Local(files))
            }
            Source::GitHub(url) => {
                let repo = parse_github_url(url)
                    .ok_or_else(|| GitHubError::InvalidUrl(url.clone()))?;

                self.emit(PipelineEvent::Step { number: 1, title: "Fetching repository structure" });
                let branch = &self.config.github.branch;
                let tree = self.github.fetch_tree(&repo, branch).await?;
                let paths: Vec<String> = tree.into_iter().map(|f| f.path).collect();

                let paths = if options.select_all || paths.is_empty() {
                    paths
                } else {
                    prompt_selection(&paths)?
                };

                Ok(Collected::Remote { repo, paths })
            }
        }
    }

    async fn parse(&self, collected: Collected) -> Vec<ParseResult> {
        let mut parsed = Vec::new();

        match collected {
            Collected::Local(files) => {
                for file in files {
                    let shown = file.to_string_lossy();
                    self.emit(PipelineEvent::Parsing(&shown));

                    match parse_file(&file) {
                        Ok(result) => self.keep_if_nonempty(result, &mut parsed),
                        Err(e) => {
                            warn!(path = %shown, error = %e, "parse failed");
                            self.emit(PipelineEvent::Skipped { path: &shown, reason: "read failed" });
                        }
                    }
                }
            }
            Collected::Remote { repo, paths } => {
                let branch = &self.config.github.branch;
                for path in &paths {
                    self.emit(PipelineEvent::Parsing(path));

                    match self.github.fetch_file(&repo, path, branch).await {
                        Ok(content) => self.keep_if_nonempty(parse_source(path, &content), &mut parsed),
                        Err(e) => {
                            warn!(path = %path, error = %e, "fetch failed");
                            self.emit(PipelineEvent::Skipped { path, reason: "fetch failed" });
                        }
                    }
                }
            }
        }

        parsed
    }

    fn keep_if_nonempty(&self, result: ParseResult, parsed: &mut Vec<ParseResult>) {
        if result.is_empty() {
            self.emit(PipelineEvent::Skipped { path: &result.file_path, reason: "no code elements" });
        } else {
            info!(path = %result.file_path, stats = %result.stats(), "parsed");
            parsed.push(result);
        }
    }

    async fn document(&self, parsed: &[ParseResult], llm: &dyn LLM) -> Vec<GeneratedDoc> {
        let generator = DocGenerator::new(llm);
        let total = parsed.len();
        let mut docs = Vec::with_capacity(total);

        for (index, result) in parsed.iter().enumerate() {
            self.emit(PipelineEvent::Documenting {
                path: &result.file_path,
                index,
                total,
            });

            match generator.generate(result).await {
                Ok(doc) => docs.push(doc),
                Err(e) => {
                    warn!(path = %result.file_path, error = %e, "documentation failed");
                    self.emit(PipelineEvent::Skipped {
                        path: &result.file_path,
                        reason: "documentation failed",
                    });
                }
            }
        }

        docs
    }
}

fn prompt_selection(paths: &[String]) -> Result<Vec<String>, SelectionError> {
    let stdin = io::stdin();
    select_files(paths, stdin.lock(), io::stdout())
}
