// src/github/mod.rs
// =============================================================================
// This module handles everything we read from GitHub.
//
// Currently implements:
// - Parsing GitHub URLs to extract owner/repo (reference.rs)
// - A small client for the GitHub REST API (api.rs)
// - Combining the API answers into RepositoryMetadata (fetch.rs)
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod api;
mod fetch;
mod models;
mod reference;

// Re-export the pieces the rest of the app needs
pub use api::{FetchError, GitHubApi};
pub use fetch::MetadataFetcher;
pub use models::RepositoryMetadata;
pub use reference::{parse, InvalidReference};

#[cfg(test)]
pub(crate) use api::RepositoryHost;
#[cfg(test)]
pub(crate) use models::{
    fixtures, FileContent, LanguageBreakdown, License, Owner, RepositoryAttributes,
};
#[cfg(test)]
pub(crate) use reference::RepositoryRef;
