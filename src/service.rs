// src/service.rs
// =============================================================================
// The whole pipeline in one place:
//
//   URL --parse--> RepositoryRef --fetch--> RepositoryMetadata --synthesize--> README
//
// Both the HTTP handler and the `generate` CLI command go through here.
// =============================================================================

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::error::AppError;
use crate::github::{self, GitHubApi, MetadataFetcher, RepositoryMetadata};
use crate::readme::{GeminiClient, Synthesizer};

pub struct ReadmeService {
    fetcher: MetadataFetcher,
    synthesizer: Synthesizer,
}

/// A finished README plus the metadata it was written from
#[derive(Debug)]
pub struct GeneratedReadme {
    pub metadata: RepositoryMetadata,
    pub content: String,
}

impl ReadmeService {
    pub fn new(fetcher: MetadataFetcher, synthesizer: Synthesizer) -> Self {
        Self {
            fetcher,
            synthesizer,
        }
    }

    /// Wires up the real GitHub and Gemini clients
    pub fn from_config(config: &Config) -> Result<Self> {
        let github = GitHubApi::new(config.github_api_url.clone(), config.github_token.as_deref())?;
        let gemini = GeminiClient::new(config.gemini_api_url.clone(), config.gemini_api_key.clone())?;

        Ok(Self::new(
            MetadataFetcher::new(Arc::new(github)),
            Synthesizer::new(Arc::new(gemini), config.models(), config.readme_language.clone()),
        ))
    }

    pub async fn generate(&self, repo_url: &str) -> Result<GeneratedReadme, AppError> {
        let repo = github::parse(repo_url)?;
        info!(%repo, "Generating README");

        let metadata = self.fetcher.fetch(&repo).await?;
        let content = self.synthesizer.synthesize(&metadata).await;

        Ok(GeneratedReadme { metadata, content })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use async_trait::async_trait;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    use super::*;
    use crate::github::{
        FetchError, FileContent, LanguageBreakdown, Owner, RepositoryAttributes, RepositoryHost,
        RepositoryRef,
    };
    use crate::readme::{Attempt, GenerationError, TextGenerator};

    /// Knows exactly one repository: acme/widget
    pub struct OneRepoHost;

    #[async_trait]
    impl RepositoryHost for OneRepoHost {
        async fn repository(&self, repo: &RepositoryRef) -> Result<RepositoryAttributes, FetchError> {
            if repo.owner != "acme" || repo.name != "widget" {
                return Err(FetchError::NotFound("Not Found".to_string()));
            }
            Ok(RepositoryAttributes {
                name: "widget".to_string(),
                description: Some("Makes widgets".to_string()),
                homepage: None,
                clone_url: "https://github.com/acme/widget.git".to_string(),
                html_url: "https://github.com/acme/widget".to_string(),
                owner: Owner {
                    login: "acme".to_string(),
                    html_url: "https://github.com/acme".to_string(),
                },
                license: None,
                topics: Vec::new(),
                language: Some("Rust".to_string()),
                stargazers_count: 1,
                forks_count: 0,
                open_issues_count: 0,
                default_branch: Some("main".to_string()),
            })
        }

        async fn languages(&self, _: &RepositoryRef) -> Result<LanguageBreakdown, FetchError> {
            Ok(LanguageBreakdown::from([("Rust".to_string(), 10)]))
        }

        async fn file(&self, _: &RepositoryRef, _: &str) -> Result<FileContent, FetchError> {
            Ok(FileContent {
                content: STANDARD.encode("# widget"),
                encoding: "base64".to_string(),
            })
        }
    }

    /// Rejects every model, so the README template is always used
    pub struct RejectingGenerator;

    #[async_trait]
    impl TextGenerator for RejectingGenerator {
        async fn generate(&self, model: &str, _: &str) -> Result<Attempt, GenerationError> {
            Ok(Attempt::Rejected(format!("models/{model} is not found")))
        }
    }

    pub fn service() -> ReadmeService {
        ReadmeService::new(
            MetadataFetcher::new(Arc::new(OneRepoHost)),
            Synthesizer::new(Arc::new(RejectingGenerator), vec!["primary".to_string()], "English"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::testing::service;
    use super::*;
    use crate::github::FetchError;

    #[tokio::test]
    async fn test_generate_end_to_end() {
        let readme = service()
            .generate("https://github.com/acme/widget.git")
            .await
            .unwrap();

        assert_eq!(readme.metadata.existing_documentation.as_deref(), Some("# widget"));
        assert!(readme.content.starts_with("# 🚀 widget"));
    }

    #[tokio::test]
    async fn test_generate_invalid_url() {
        let err = service().generate("https://gitlab.com/acme/widget").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidReference(_)));
    }

    #[tokio::test]
    async fn test_generate_unknown_repository() {
        let err = service().generate("https://github.com/acme/gadget").await.unwrap_err();
        assert!(matches!(err, AppError::Fetch(FetchError::NotFound(_))));
    }
}
