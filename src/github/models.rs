// src/github/models.rs
// =============================================================================
// Data shapes coming back from the GitHub REST API, and the combined
// RepositoryMetadata that the rest of the app works with.
//
// The field names match GitHub's JSON so serde can deserialize the responses
// directly. Anything GitHub may send as `null` is an Option.
// =============================================================================

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub login: String,
    pub html_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub name: String,
}

/// Response body of `GET /repos/{owner}/{repo}`, trimmed to what we use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryAttributes {
    pub name: String,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub clone_url: String,
    pub html_url: String,
    pub owner: Owner,
    pub license: Option<License>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
    pub default_branch: Option<String>,
}

/// Response body of `GET /repos/{owner}/{repo}/contents/{path}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileContent {
    pub content: String,
    pub encoding: String,
}

/// Language name -> number of bytes written in it.
pub type LanguageBreakdown = HashMap<String, u64>;

/// Everything we know about a repository, gathered from up to three requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryMetadata {
    pub name: String,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub clone_url: String,
    pub html_url: String,
    pub owner: Owner,
    pub license: Option<License>,
    pub topics: Vec<String>,
    pub primary_language: Option<String>,
    pub languages: LanguageBreakdown,
    pub star_count: u64,
    pub fork_count: u64,
    pub open_issues_count: u64,
    pub default_branch: Option<String>,
    pub existing_documentation: Option<String>,
}

impl RepositoryMetadata {
    pub fn new(
        attributes: RepositoryAttributes,
        languages: LanguageBreakdown,
        existing_documentation: Option<String>,
    ) -> Self {
        Self {
            name: attributes.name,
            description: attributes.description,
            homepage: attributes.homepage,
            clone_url: attributes.clone_url,
            html_url: attributes.html_url,
            owner: attributes.owner,
            license: attributes.license,
            topics: attributes.topics,
            primary_language: attributes.language,
            languages,
            star_count: attributes.stargazers_count,
            fork_count: attributes.forks_count,
            open_issues_count: attributes.open_issues_count,
            default_branch: attributes.default_branch,
            existing_documentation,
        }
    }

    /// Language names joined with ", ", most-used first.
    ///
    /// Ties are broken by name so the result doesn't depend on map order.
    pub fn language_list(&self) -> String {
        let mut languages: Vec<(&String, &u64)> = self.languages.iter().collect();
        languages.sort_by(|(a_name, a_bytes), (b_name, b_bytes)| {
            b_bytes.cmp(a_bytes).then_with(|| a_name.cmp(b_name))
        });

        languages
            .into_iter()
            .map(|(name, _)| name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn description_or(&self, placeholder: &str) -> String {
        match self.description.as_deref().map(str::trim) {
            Some(description) if !description.is_empty() => description.to_string(),
            _ => placeholder.to_string(),
        }
    }
}
