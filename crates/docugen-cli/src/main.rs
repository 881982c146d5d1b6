use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::{ArgGroup, Parser};
use color_eyre::eyre::{bail, Result, WrapErr};
use docugen_core::llm::Provider;
use docugen_core::pipeline::PipelineEvent;
use docugen_core::{Config, Pipeline, PipelineOptions, PipelineReport, Source};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

const RULE_WIDTH: usize = 60;

#[derive(Parser)]
#[command(name = "docugen")]
#[command(about = "Generate markdown documentation for a codebase with an LLM", long_about = None)]
#[command(version)]
#[command(group(ArgGroup::new("source").required(true).args(["target", "github"])))]
struct Cli {
    /// Local directory to document
    #[arg(long, value_name = "DIR")]
    target: Option<PathBuf>,

    /// GitHub repository URL to document
    #[arg(long, value_name = "URL")]
    github: Option<String>,

    /// Output directory for markdown files
    #[arg(long, short, value_name = "DIR")]
    output: Option<PathBuf>,

    /// API key for the LLM provider (defaults to ANTHROPIC_API_KEY)
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,

    /// Branch to read from when using --github
    #[arg(long, value_name = "NAME")]
    branch: Option<String>,

    /// Document every repository file without prompting
    #[arg(long)]
    all: bool,

    /// Print the extracted elements as JSON and stop
    #[arg(long)]
    extract_only: bool,

    /// Config file to use instead of docugen.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .wrap_err_with(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().wrap_err("failed to load config")?,
    };

    if let Some(key) = &cli.api_key {
        config.llm.api_key = Some(key.clone());
    }
    if let Some(branch) = &cli.branch {
        config.github.branch = branch.clone();
    }
    if let Some(output) = &cli.output {
        config.output.dir = output.clone();
    }

    let source = Source::from_args(cli.target.clone(), cli.github.clone())?;

    let options = PipelineOptions {
        source,
        output_dir: config.output.dir.clone(),
        select_all: cli.all,
        extract_only: cli.extract_only,
    };

    if cli.extract_only {
        let report = pipeline(config, false).run(&options, None).await?;
        println!("{}", serde_json::to_string_pretty(&report.parsed)?);
        return Ok(());
    }

    if config.llm.api_key_or_env().is_none() && !config.llm.is_keyless() {
        bail!(
            "no API key found for provider '{}'\n\
             Set it via:\n  \
             - Environment variable: export ANTHROPIC_API_KEY=your-key\n  \
             - Command line flag: --api-key=your-key",
            config.llm.provider
        );
    }

    let llm = Provider::from_config(&config.llm)?.build()?;
    debug!(provider = %config.llm.provider, model = %config.llm.model_or_default(), "LLM ready");

    print_banner(&options, &config);
    let report = pipeline(config, true).run(&options, Some(llm.as_ref())).await?;
    print_summary(&report);

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "docugen=debug,docugen_core=debug"
    } else {
        "docugen=info,docugen_core=warn"
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();
}

/// Builds the pipeline, attaching console output when `chatty` is set.
///
/// Extraction-only runs stay quiet so stdout carries nothing but JSON.
fn pipeline(config: Config, chatty: bool) -> Pipeline {
    let pipeline = Pipeline::new(config);
    if !chatty {
        return pipeline;
    }

    let progress: Mutex<Option<ProgressBar>> = Mutex::new(None);
    pipeline.with_reporter(move |event| report_event(event, &progress))
}

fn report_event(event: &PipelineEvent<'_>, progress: &Mutex<Option<ProgressBar>>) {
    match *event {
        PipelineEvent::Step { number, title } => println!("\nStep {}: {}...", number, title),
        PipelineEvent::FilesFound(n) => println!("  Found {} code files\n", n),
        PipelineEvent::Parsing(path) => println!("     Parsing: {}", path),
        PipelineEvent::Skipped { path, reason } => println!("     Skipping ({}): {}", reason, path),
        PipelineEvent::Parsed(n) => println!("  Parsed {} files with code elements", n),
        PipelineEvent::Documenting { path, index, total } => {
            let Ok(mut slot) = progress.lock() else {
                return;
            };
            let bar = slot.get_or_insert_with(|| new_progress_bar(total as u64));
            bar.set_position(index as u64);
            bar.set_message(path.to_string());
        }
        PipelineEvent::Documented(n) => {
            if let Ok(mut slot) = progress.lock() {
                if let Some(bar) = slot.take() {
                    bar.finish_and_clear();
                }
            }
            println!("  Generated documentation for {} files", n);
        }
        PipelineEvent::Exported(path) => println!("     Exported: {}", path.display()),
    }
}

fn new_progress_bar(total: u64) -> ProgressBar {
    if !std::io::stdout().is_terminal() {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(total);
    let style = ProgressStyle::with_template("  [{bar:30}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
    bar.set_style(style);
    bar
}

fn print_banner(options: &PipelineOptions, config: &Config) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("\n   DocuGen - AI-Powered Documentation Generator");
    println!("{}", rule);
    match &options.source {
        Source::Local(dir) => {
            println!("  Mode: Local Directory");
            println!("  Target: {}", dir.display());
        }
        Source::GitHub(url) => {
            println!("  Mode: GitHub Repository");
            println!("  URL: {}", url);
            println!("  Branch: {}", config.github.branch);
        }
    }
    println!("  Output: {}", options.output_dir.display());
    println!("  Model: {}", config.llm.model_or_default());
    println!("{}", rule);
}

fn print_summary(report: &PipelineReport) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("\n{}", rule);
    if report.files_found == 0 {
        println!("  No code files found");
    } else if report.parsed.is_empty() {
        println!("  No code elements found to document");
    } else {
        println!(
            "  Documentation generation complete! {} of {} files exported",
            report.exported.len(),
            report.files_parsed()
        );
    }
    println!("{}\n", rule);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_source_is_required() {
        assert!(Cli::try_parse_from(["docugen"]).is_err());
    }

    #[test]
    fn test_sources_conflict() {
        let result = Cli::try_parse_from(["docugen", "--target", "src", "--github", "https://github.com/a/b"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "docugen",
            "--github",
            "https://github.com/a/b",
            "--branch",
            "dev",
            "--all",
            "--extract-only",
            "-o",
            "out",
        ])
        .unwrap();
        assert_eq!(cli.github.as_deref(), Some("https://github.com/a/b"));
        assert_eq!(cli.branch.as_deref(), Some("dev"));
        assert!(cli.all && cli.extract_only);
        assert_eq!(cli.output, Some(PathBuf::from("out")));
    }
}
