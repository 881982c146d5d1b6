//! Documentation generation from extracted elements.

mod generator;
mod prompts;

pub use generator::{DocGenerator, GeneratedDoc};
pub use prompts::build_docs_prompt;
