use tracing::{debug, warn};

use crate::extract::ParseResult;
use crate::llm::{LLMError, LLM};

use super::prompts::build_docs_prompt;

/// Markdown documentation produced for one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDoc {
    pub file_path: String,
    pub documentation: String,
}

/// Asks an LLM to document the elements of a parsed file.
pub struct DocGenerator<L: LLM> {
    llm: L,
}

impl<L: LLM> DocGenerator<L> {
    /// Creates a new generator around an LLM client.
    pub fn new(llm: L) -> Self {
        Self { llm }
    }

    /// Generates documentation for one parse result.
    pub async fn generate(&self, parsed: &ParseResult) -> Result<GeneratedDoc, LLMError> {
        let prompt = build_docs_prompt(&parsed.file_path, &parsed.elements);
        debug!(
            path = %parsed.file_path,
            elements = parsed.elements.len(),
            prompt_len = prompt.len(),
            "requesting documentation"
        );

        let documentation = self.llm.complete(&prompt).await?;

        if documentation.trim().is_empty() {
            warn!(path = %parsed.file_path, "LLM returned empty documentation");
        }

        Ok(GeneratedDoc {
            file_path: parsed.file_path.clone(),
            documentation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::CodeElement;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingLLM {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl LLM for RecordingLLM {
        async fn complete(&self, prompt: &str) -> Result<String, LLMError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok("# Overview".to_string())
        }

        async fn complete_with_system(&self, _system: &str, prompt: &str) -> Result<String, LLMError> {
            self.complete(prompt).await
        }
    }

    #[tokio::test]
    async fn test_generate_uses_file_prompt() {
        let llm = RecordingLLM {
            prompts: Mutex::new(Vec::new()),
        };
        let generator = DocGenerator::new(llm);
        let parsed = ParseResult::new("lib/util.py", vec![CodeElement::function("helper", 1)]);

        let doc = generator.generate(&parsed).await.unwrap();

        assert_eq!(doc.file_path, "lib/util.py");
        assert_eq!(doc.documentation, "# Overview");
        let prompts = generator.llm.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("\"name\": \"helper\""));
    }
}
