//! Default values for docugen configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// Scan Defaults
// ============================================================================

/// Maximum size of a single source file to parse (1 MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Default file extensions to collect, matching the recognizers.
pub const DEFAULT_EXTENSIONS: &[&str] = &["ts", "js", "tsx", "jsx", "py", "java", "cpp", "c", "go"];

/// Default directories to exclude from scanning.
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[
    // Version control
    ".git",
    ".svn",
    ".hg",
    // Dependencies
    "node_modules",
    "vendor",
    "venv",
    ".venv",
    "__pycache__",
    // Build outputs
    "target",
    "build",
    "dist",
    "out",
    // Other common excludes
    "coverage",
    ".next",
    ".cache",
];

// ============================================================================
// LLM Defaults
// ============================================================================

/// Default LLM provider.
pub const DEFAULT_LLM_PROVIDER: &str = "anthropic";

/// Default max tokens for one file's documentation.
pub const DEFAULT_MAX_TOKENS: u32 = 2000;

// OpenAI defaults
/// Default OpenAI API URL.
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1";
/// Default OpenAI model.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";

// Anthropic defaults
/// Default Anthropic API URL.
pub const DEFAULT_ANTHROPIC_URL: &str = "https://api.anthropic.com/v1/messages";
/// Default Anthropic model.
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-sonnet-4-20250514";
/// Default Anthropic API version.
pub const DEFAULT_ANTHROPIC_API_VERSION: &str = "2023-06-01";

// Ollama defaults
/// Default Ollama API URL.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434/v1";
/// Default Ollama model.
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3";

// ============================================================================
// GitHub Defaults
// ============================================================================

/// Default GitHub REST API base URL.
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Default branch to read from.
pub const DEFAULT_GITHUB_BRANCH: &str = "main";

/// User agent sent to GitHub, which rejects requests without one.
pub const DEFAULT_USER_AGENT: &str = concat!("docugen/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Output Defaults
// ============================================================================

/// Default documentation output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "./docs";

/// Suffix replacing a source file's extension in the exported file name.
pub const DOCS_FILE_SUFFIX: &str = "_docs.md";

/// Project-local config file name.
pub const PROJECT_CONFIG_FILE: &str = "docugen.toml";
