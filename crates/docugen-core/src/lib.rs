pub mod config;
pub mod extract;
pub mod scan;
pub mod github;
pub mod select;
pub mod llm;
pub mod docs;
pub mod export;
pub mod pipeline;

pub use config::Config;
pub use extract::{parse_file, parse_source, CodeElement, ElementKind, Language, ParseResult};
pub use docs::{DocGenerator, GeneratedDoc};
pub use pipeline::{Pipeline, PipelineError, PipelineOptions, PipelineReport, Source};
