// src/github/api.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// We need three read-only endpoints:
//   GET /repos/{owner}/{repo}                  -> repository attributes
//   GET /repos/{owner}/{repo}/languages        -> bytes of code per language
//   GET /repos/{owner}/{repo}/contents/{path}  -> one file, base64-encoded
//
// The RepositoryHost trait is the seam between "how to ask GitHub" (this file)
// and "what to do with the answers" (fetch.rs). Tests swap in a fake host.
// =============================================================================

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use url::Url;

use super::models::{FileContent, LanguageBreakdown, RepositoryAttributes};
use super::reference::RepositoryRef;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// GitHub answered, but not with the data we asked for (404, 403 rate
    /// limit, ...). Holds GitHub's own error message.
    #[error("{0}")]
    NotFound(String),
    /// The request never produced a usable answer (network, bad JSON).
    #[error("GitHub request failed: {0}")]
    Upstream(String),
}

/// Read access to repositories on a hosting provider.
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    async fn repository(&self, repo: &RepositoryRef) -> Result<RepositoryAttributes, FetchError>;

    async fn languages(&self, repo: &RepositoryRef) -> Result<LanguageBreakdown, FetchError>;

    async fn file(&self, repo: &RepositoryRef, path: &str) -> Result<FileContent, FetchError>;
}

// GitHub error bodies look like {"message": "Not Found", "documentation_url": "..."}
#[derive(Debug, Deserialize)]
struct ApiMessage {
    message: String,
}

/// RepositoryHost backed by the real GitHub API.
pub struct GitHubApi {
    client: Client,
    base_url: Url,
}

impl GitHubApi {
    // Creates a client with the headers GitHub expects on every request
    //
    // Parameters:
    //   base_url: usually https://api.github.com
    //   token: optional personal access token (raises the rate limit)
    pub fn new(base_url: Url, token: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .context("GITHUB_TOKEN contains characters not allowed in a header")?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        // GitHub rejects requests without a User-Agent
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .context("Failed to create GitHub HTTP client")?;

        Ok(Self { client, base_url })
    }

    // Builds {base}/repos/{owner}/{repo}/{extra...}
    // path_segments_mut percent-encodes each segment for us
    fn endpoint(&self, repo: &RepositoryRef, extra: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::Upstream(format!("invalid API base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(["repos", repo.owner.as_str(), repo.name.as_str()])
            .extend(extra);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        debug!(%url, "GitHub request");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Upstream(format!("{url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            // Prefer GitHub's explanation ("Not Found", "API rate limit exceeded ...")
            let message = match response.json::<ApiMessage>().await {
                Ok(body) => body.message,
                Err(_) => format!("HTTP {status}"),
            };
            debug!(%url, %status, %message, "GitHub request unsuccessful");
            return Err(FetchError::NotFound(message));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Upstream(format!("unexpected response from {url}: {e}")))
    }
}

#[async_trait]
impl RepositoryHost for GitHubApi {
    async fn repository(&self, repo: &RepositoryRef) -> Result<RepositoryAttributes, FetchError> {
        self.get_json(self.endpoint(repo, &[])?).await
    }

    async fn languages(&self, repo: &RepositoryRef) -> Result<LanguageBreakdown, FetchError> {
        self.get_json(self.endpoint(repo, &["languages"])?).await
    }

    async fn file(&self, repo: &RepositoryRef, path: &str) -> Result<FileContent, FetchError> {
        let mut segments = vec!["contents"];
        segments.extend(path.split('/'));
        self.get_json(self.endpoint(repo, &segments)?).await
    }
}
