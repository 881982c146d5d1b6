use async_trait::async_trait;
use base64::Engine;
use docugen_core::llm::{LLMError, LLM};
use docugen_core::pipeline::PipelineEvent;
use docugen_core::{Config, Pipeline, PipelineError, PipelineOptions, Source};
use serde_json::json;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Answers every prompt with a fixed document, failing for prompts that
/// mention `fail_on`.
struct StubLLM {
    fail_on: Option<&'static str>,
    calls: Mutex<usize>,
}

impl StubLLM {
    fn new() -> Self {
        Self {
            fail_on: None,
            calls: Mutex::new(0),
        }
    }

    fn failing_on(name: &'static str) -> Self {
        Self {
            fail_on: Some(name),
            calls: Mutex::new(0),
        }
    }
}

#[async_trait]
impl LLM for StubLLM {
    async fn complete(&self, prompt: &str) -> Result<String, LLMError> {
        *self.calls.lock().unwrap() += 1;
        match self.fail_on {
            Some(name) if prompt.contains(name) => Err(LLMError::RateLimited),
            _ => Ok("# Generated".to_string()),
        }
    }

    async fn complete_with_system(&self, _system: &str, prompt: &str) -> Result<String, LLMError> {
        self.complete(prompt).await
    }
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn local_options(root: &Path, output: &Path) -> PipelineOptions {
    PipelineOptions {
        source: Source::Local(root.to_path_buf()),
        output_dir: output.to_path_buf(),
        select_all: true,
        extract_only: false,
    }
}

#[tokio::test]
async fn test_local_run_documents_and_exports() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("project");
    let output = temp_dir.path().join("docs");
    write(&root, "src/api.js", "function handler() {}\nrouter.get('/x', handler);\n");
    write(&root, "src/constants.py", "LIMIT = 10\n");
    write(&root, "README.md", "# Project\n");

    let llm = StubLLM::new();
    let report = Pipeline::new(Config::default())
        .run(&local_options(&root, &output), Some(&llm))
        .await
        .unwrap();

    assert_eq!(report.files_found, 2);
    assert_eq!(report.files_parsed(), 1);
    assert_eq!(report.documented, 1);
    assert_eq!(report.exported.len(), 1);

    let exported = &report.exported[0];
    assert!(exported.starts_with(&output));
    assert!(exported.to_string_lossy().ends_with("src_api_docs.md"));
    assert_eq!(fs::read_to_string(exported).unwrap(), "# Generated");
    assert_eq!(*llm.calls.lock().unwrap(), 1);
}

#[tokio::test]
async fn test_llm_failure_skips_file() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("project");
    let output = temp_dir.path().join("docs");
    write(&root, "a.go", "package a\n\nfunc Alpha() {}\n");
    write(&root, "b.go", "package b\n\nfunc Beta() {}\n");

    let llm = StubLLM::failing_on("Beta");
    let report = Pipeline::new(Config::default())
        .run(&local_options(&root, &output), Some(&llm))
        .await
        .unwrap();

    assert_eq!(report.files_parsed(), 2);
    assert_eq!(report.documented, 1);
    assert_eq!(report.exported.len(), 1);
    assert!(report.exported[0].to_string_lossy().ends_with("a_docs.md"));
}

#[tokio::test]
async fn test_extract_only_needs_no_llm() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("project");
    let output = temp_dir.path().join("docs");
    write(&root, "Main.java", "public class Main {\n    public static void main(String[] args) {}\n}\n");

    let options = PipelineOptions {
        extract_only: true,
        ..local_options(&root, &output)
    };
    let report = Pipeline::new(Config::default()).run(&options, None).await.unwrap();

    assert_eq!(report.files_parsed(), 1);
    let names: Vec<&str> = report.parsed[0].elements.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Main", "main"]);
    assert!(report.exported.is_empty());
    assert!(!output.exists());
}

#[tokio::test]
async fn test_missing_directory_aborts() {
    let temp_dir = TempDir::new().unwrap();
    let options = local_options(&temp_dir.path().join("absent"), temp_dir.path());

    let result = Pipeline::new(Config::default()).run(&options, None::<&dyn LLM>).await;
    assert!(matches!(result, Err(PipelineError::MissingLLM)));

    let options = PipelineOptions {
        extract_only: true,
        ..options
    };
    let result = Pipeline::new(Config::default()).run(&options, None).await;
    assert!(matches!(result, Err(PipelineError::Scan(_))));
}

#[tokio::test]
async fn test_invalid_github_url() {
    let options = PipelineOptions {
        source: Source::GitHub("https://example.com/not/github".to_string()),
        output_dir: "docs".into(),
        select_all: true,
        extract_only: true,
    };
    let result = Pipeline::new(Config::default()).run(&options, None).await;
    assert!(matches!(result, Err(PipelineError::GitHub(_))));
}

#[tokio::test]
async fn test_github_run_parses_remote_paths() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/widgets/git/trees/main"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tree": [
                { "path": "src", "type": "tree" },
                { "path": "src/models.py", "type": "blob" },
                { "path": "src/broken.ts", "type": "blob" }
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/widgets/contents/src/models.py"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": base64::engine::general_purpose::STANDARD.encode("class User:\n    pass\n")
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/widgets/contents/src/broken.ts"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut config = Config::default();
    config.github.api_url = server.uri();

    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let pipeline = Pipeline::new(config).with_reporter(move |event| {
        if let PipelineEvent::Skipped { path, reason } = event {
            sink.lock().unwrap().push(format!("{}: {}", path, reason));
        }
    });

    let options = PipelineOptions {
        source: Source::GitHub("https://github.com/octo/widgets".to_string()),
        output_dir: "docs".into(),
        select_all: true,
        extract_only: true,
    };
    let report = pipeline.run(&options, None).await.unwrap();

    assert_eq!(report.files_found, 2);
    assert_eq!(report.files_parsed(), 1);
    assert_eq!(report.parsed[0].file_path, "src/models.py");
    assert_eq!(report.parsed[0].elements[0].name, "User");
    assert_eq!(*events.lock().unwrap(), vec!["src/broken.ts: fetch failed".to_string()]);
}
