// src/config.rs
// =============================================================================
// Settings read from the environment (a .env file is loaded first by main.rs).
//
// Only GEMINI_API_KEY is required; everything else has a default.
// Empty variables count as unset.
// =============================================================================

use std::env;

use url::Url;

const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Origin allowed by CORS ("*" for any)
    pub cors_origin: String,
    /// GitHub REST API base URL
    pub github_api_url: Url,
    /// Optional GitHub token, raises the API rate limit
    pub github_token: Option<String>,
    /// Gemini API base URL
    pub gemini_api_url: Url,
    /// Gemini API key (required)
    pub gemini_api_key: String,
    /// Model tried first
    pub gemini_model: String,
    /// Model tried when the first one is rejected
    pub gemini_fallback_model: String,
    /// Natural language the README prose is written in
    pub readme_language: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from any name -> value lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let var_or = |name: &str, default: &str| var(name).unwrap_or_else(|| default.to_string());

        let gemini_api_key = var("GEMINI_API_KEY").ok_or(ConfigError::MissingEnvVar("GEMINI_API_KEY"))?;

        let port = var_or("PORT", "3001")
            .parse()
            .map_err(|_| ConfigError::InvalidValue("PORT"))?;

        let github_api_url = parse_base_url(&var_or("GITHUB_API_URL", DEFAULT_GITHUB_API_URL))
            .ok_or(ConfigError::InvalidValue("GITHUB_API_URL"))?;

        let gemini_api_url = parse_base_url(&var_or("GEMINI_API_URL", DEFAULT_GEMINI_API_URL))
            .ok_or(ConfigError::InvalidValue("GEMINI_API_URL"))?;

        Ok(Self {
            host: var_or("HOST", "0.0.0.0"),
            port,
            cors_origin: var_or("CORS_ORIGIN", "*"),
            github_api_url,
            github_token: var("GITHUB_TOKEN"),
            gemini_api_url,
            gemini_api_key,
            gemini_model: var_or("GEMINI_MODEL", "gemini-pro"),
            gemini_fallback_model: var_or("GEMINI_FALLBACK_MODEL", "gemini-1.5-pro"),
            readme_language: var_or("README_LANGUAGE", "English"),
        })
    }

    /// Model identifiers in the order they should be tried
    pub fn models(&self) -> Vec<String> {
        let mut models = vec![self.gemini_model.clone()];
        if self.gemini_fallback_model != self.gemini_model {
            models.push(self.gemini_fallback_model.clone());
        }
        models
    }
}

// Only http(s) URLs that can have path segments appended are usable as API bases
fn parse_base_url(value: &str) -> Option<Url> {
    let url = Url::parse(value).ok()?;
    let usable = matches!(url.scheme(), "http" | "https") && !url.cannot_be_a_base();
    usable.then_some(url)
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("GEMINI_API_KEY", "secret")]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3001);
        assert_eq!(config.cors_origin, "*");
        assert_eq!(config.github_api_url.as_str(), "https://api.github.com/");
        assert_eq!(config.github_token, None);
        assert_eq!(config.gemini_api_key, "secret");
        assert_eq!(config.models(), vec!["gemini-pro", "gemini-1.5-pro"]);
        assert_eq!(config.readme_language, "English");
    }

    #[test]
    fn test_missing_api_key_fails_fast() {
        assert_eq!(load(&[]).unwrap_err(), ConfigError::MissingEnvVar("GEMINI_API_KEY"));
        assert_eq!(
            load(&[("GEMINI_API_KEY", "  ")]).unwrap_err(),
            ConfigError::MissingEnvVar("GEMINI_API_KEY")
        );
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("GEMINI_API_KEY", "secret"),
            ("PORT", "8080"),
            ("GITHUB_TOKEN", "ghp_x"),
            ("GEMINI_MODEL", "gemini-1.5-flash"),
            ("GEMINI_FALLBACK_MODEL", "gemini-1.5-flash"),
            ("README_LANGUAGE", "Brazilian Portuguese"),
            ("CORS_ORIGIN", "https://app.example.com"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.github_token.as_deref(), Some("ghp_x"));
        assert_eq!(config.models(), vec!["gemini-1.5-flash"]);
        assert_eq!(config.readme_language, "Brazilian Portuguese");
        assert_eq!(config.cors_origin, "https://app.example.com");
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            load(&[("GEMINI_API_KEY", "k"), ("PORT", "eighty")]).unwrap_err(),
            ConfigError::InvalidValue("PORT")
        );
        assert_eq!(
            load(&[("GEMINI_API_KEY", "k"), ("GITHUB_API_URL", "mailto:me@example.com")]).unwrap_err(),
            ConfigError::InvalidValue("GITHUB_API_URL")
        );
        assert_eq!(
            load(&[("GEMINI_API_KEY", "k"), ("GEMINI_API_URL", "not a url")]).unwrap_err(),
            ConfigError::InvalidValue("GEMINI_API_URL")
        );
    }
}
