// src/github/fetch.rs
// =============================================================================
// This module gathers everything we know about a repository.
//
// Strategy:
// - Ask for the repository attributes and the language breakdown together
// - If either of them fails, give up (we can't describe the project without them)
// - Then try to read README.md; if that fails for ANY reason, carry on without it
//
// Why the asymmetry?
// - Plenty of repositories have no README yet. That is the whole reason
//   someone would want one generated, so a missing file is not an error.
// =============================================================================

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::{debug, info, warn};

use super::api::{FetchError, RepositoryHost};
use super::models::{FileContent, RepositoryMetadata};
use super::reference::RepositoryRef;

pub const README_PATH: &str = "README.md";

pub struct MetadataFetcher {
    host: Arc<dyn RepositoryHost>,
}

impl MetadataFetcher {
    pub fn new(host: Arc<dyn RepositoryHost>) -> Self {
        Self { host }
    }

    // Fetches attributes, languages and the existing README of a repository
    //
    // Returns: RepositoryMetadata, or the error of the first fatal request.
    // When both fatal requests fail, the attributes error wins.
    pub async fn fetch(&self, repo: &RepositoryRef) -> Result<RepositoryMetadata, FetchError> {
        info!(%repo, "Fetching repository metadata");

        let (attributes, languages) =
            futures::join!(self.host.repository(repo), self.host.languages(repo));
        let attributes = attributes?;
        let languages = languages?;

        let existing_documentation = self.existing_documentation(repo).await;

        Ok(RepositoryMetadata::new(
            attributes,
            languages,
            existing_documentation,
        ))
    }

    async fn existing_documentation(&self, repo: &RepositoryRef) -> Option<String> {
        let file = match self.host.file(repo, README_PATH).await {
            Ok(file) => file,
            Err(e) => {
                info!(%repo, error = %e, "No README found, a new one will be written");
                return None;
            }
        };

        let decoded = decode_file(&file);
        if decoded.is_none() {
            warn!(%repo, encoding = %file.encoding, "Could not decode README contents");
        } else {
            debug!(%repo, "Existing README loaded");
        }
        decoded
    }
}

// GitHub sends file contents as base64 with a line break every 60 characters.
// Returns None for any other encoding (e.g. "none" for files over 1 MB).
pub fn decode_file(file: &FileContent) -> Option<String> {
    if !file.encoding.eq_ignore_ascii_case("base64") {
        return None;
    }

    let compact: String = file.content.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD.decode(compact).ok()?;
    Some(String::from_utf8_lossy(&bytes).into_owned())
}
