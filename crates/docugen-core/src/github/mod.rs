//! Remote repository source backed by the GitHub REST API.
//!
//! Only two endpoints are used: the recursive git tree of a branch, to list
//! candidate files, and the contents endpoint, to fetch one file at a time.

use base64::Engine;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::config::{GitHubConfig, DEFAULT_USER_AGENT};
use crate::extract::SUPPORTED_EXTENSIONS;

/// Errors that can occur while talking to GitHub.
#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("Invalid GitHub URL: {0}")]
    InvalidUrl(String),

    #[error("GitHub API returned error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse GitHub response: {0}")]
    Parse(String),

    #[error("Could not decode content of {path}: {message}")]
    Decode { path: String, message: String },
}

impl From<reqwest::Error> for GitHubError {
    fn from(err: reqwest::Error) -> Self {
        GitHubError::Network(err.to_string())
    }
}

/// Owner and repository name of a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl std::fmt::Display for RepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Extracts owner and repository from anything containing
/// `github.com/<owner>/<repo>`.
///
/// A trailing `.git` is stripped; extra path segments are ignored.
pub fn parse_github_url(url: &str) -> Option<RepoRef> {
    let (_, rest) = url.split_once("github.com/")?;
    let mut segments = rest.split('/');

    let owner = segments.next().filter(|s| !s.is_empty())?;
    let repo = segments.next().filter(|s| !s.is_empty())?;
    let repo = repo.strip_suffix(".git").unwrap_or(repo);

    if repo.is_empty() {
        return None;
    }

    Some(RepoRef {
        owner: owner.to_string(),
        repo: repo.to_string(),
    })
}

/// A code file listed in a repository tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFile {
    /// Path relative to the repository root, `/`-separated.
    pub path: String,
    /// Size in bytes, when GitHub reports it.
    pub size: Option<u64>,
}

/// Whether a tree path looks like a file the extractor understands.
fn is_code_path(path: &str) -> bool {
    path.rsplit_once('.')
        .map(|(_, ext)| SUPPORTED_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Minimal GitHub REST client.
pub struct GitHubClient {
    api_url: String,
    token: Option<String>,
    client: Client,
}

impl GitHubClient {
    /// Creates a client against the public API without a token.
    pub fn new() -> Self {
        Self::from_config(&GitHubConfig::default())
    }

    /// Creates a client from the `[github]` config section.
    pub fn from_config(config: &GitHubConfig) -> Self {
        Self {
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            client: Client::new(),
        }
    }

    /// Sets the API base URL (GitHub Enterprise or a test server).
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Lists the code files on `branch`, dropping directories and other
    /// blobs.
    pub async fn fetch_tree(&self, repo: &RepoRef, branch: &str) -> Result<Vec<RemoteFile>, GitHubError> {
        let url = format!(
            "{}/repos/{}/{}/git/trees/{}?recursive=1",
            self.api_url, repo.owner, repo.repo, branch
        );

        let tree: TreeResponse = self.get_json(&url).await?;

        if tree.truncated {
            debug!(repo = %repo, "GitHub truncated the tree listing");
        }

        let files: Vec<RemoteFile> = tree
            .tree
            .into_iter()
            .filter(|entry| entry.entry_type != "tree" && is_code_path(&entry.path))
            .map(|entry| RemoteFile {
                path: entry.path,
                size: entry.size,
            })
            .collect();

        debug!(repo = %repo, branch, files = files.len(), "fetched repository tree");

        Ok(files)
    }

    /// Fetches and decodes the text of one file on `branch`.
    pub async fn fetch_file(&self, repo: &RepoRef, path: &str, branch: &str) -> Result<String, GitHubError> {
        let url = format!(
            "{}/repos/{}/{}/contents/{}?ref={}",
            self.api_url, repo.owner, repo.repo, path, branch
        );

        let contents: ContentsResponse = self.get_json(&url).await?;
        decode_content(path, &contents.content)
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, GitHubError> {
        let mut req = self
            .client
            .get(url)
            .header("user-agent", DEFAULT_USER_AGENT)
            .header("accept", "application/vnd.github+json");

        if let Some(token) = &self.token {
            req = req.header("authorization", format!("Bearer {}", token));
        }

        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GitHubError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| GitHubError::Parse(e.to_string()))
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}

/// GitHub wraps base64 content at 60 columns.
fn decode_content(path: &str, encoded: &str) -> Result<String, GitHubError> {
    let cleaned: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(cleaned)
        .map_err(|e| GitHubError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        })?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[derive(Debug, Deserialize)]
struct TreeResponse {
    tree: Vec<TreeEntry>,
    #[serde(default)]
    truncated: bool,
}

#[derive(Debug, Deserialize)]
struct TreeEntry {
    path: String,
    #[serde(rename = "type")]
    entry_type: String,
    #[serde(default)]
    size: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ContentsResponse {
    #[serde(default)]
    content: String,
}
