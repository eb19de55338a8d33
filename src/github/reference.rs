// src/github/reference.rs
// =============================================================================
// This module turns a GitHub URL into an (owner, name) pair.
//
// Supported formats:
//   - https://github.com/owner/repo
//   - https://github.com/owner/repo.git
//   - https://github.com/owner/repo/tree/main/src   (extra segments ignored)
//   - github.com/owner/repo
//   - git@github.com:owner/repo.git
//
// The parser is a pure function: no network, no allocation beyond the result.
// =============================================================================

use std::fmt;

use thiserror::Error;

const GITHUB_DOMAIN: &str = "github.com";

/// An `owner/name` pair identifying one repository on GitHub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    pub owner: String,
    pub name: String,
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// The input did not look like a link to a GitHub repository.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Not a valid GitHub repository URL: {url}")]
pub struct InvalidReference {
    pub url: String,
}

// Parses a GitHub URL to extract owner and repository name
//
// Returns: RepositoryRef
//
// Example:
//   "https://github.com/rust-lang/rust" -> { owner: "rust-lang", name: "rust" }
pub fn parse(url: &str) -> Result<RepositoryRef, InvalidReference> {
    let invalid = || InvalidReference {
        url: url.to_string(),
    };

    // The domain may show up more than once ("github.com.example.org/..."),
    // so try every occurrence until one is followed by a path separator.
    for (index, _) in url.match_indices(GITHUB_DOMAIN) {
        let rest = &url[index + GITHUB_DOMAIN.len()..];
        let path = match rest.strip_prefix('/').or_else(|| rest.strip_prefix(':')) {
            Some(path) => path,
            None => continue,
        };

        let mut parts = path.split('/');
        let owner = parts.next().unwrap_or_default().trim();
        let name = parts.next().map(clean_name).unwrap_or_default();

        if owner.is_empty() || name.is_empty() {
            return Err(invalid());
        }

        return Ok(RepositoryRef {
            owner: owner.to_string(),
            name: name.to_string(),
        });
    }

    Err(invalid())
}

// Drops anything that isn't part of the repository name itself:
// a query string, a fragment, and the ".git" suffix.
fn clean_name(segment: &str) -> &str {
    let segment = segment
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim();

    segment.strip_suffix(".git").unwrap_or(segment)
}
