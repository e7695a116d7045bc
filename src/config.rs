//! Configuration for articlens.
//!
//! The only required setting is the analysis backend's base URL, supplied
//! via the environment (or the CLI's `--api-url` flag) and defaulting to a
//! local development address.

use anyhow::Context;
use url::Url;

/// Environment variable holding the backend base URL.
pub const API_BASE_URL_ENV: &str = "ARTICLENS_API_BASE_URL";

/// Default backend address for local development.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the analysis backend.
    pub api_base_url: Url,
}

impl Settings {
    /// Load settings from the environment, falling back to the development
    /// default when the variable is unset or empty.
    pub fn from_env() -> anyhow::Result<Self> {
        let raw = std::env::var(API_BASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        Self::with_base_url(&raw)
    }

    /// Build settings from an explicit base URL.
    pub fn with_base_url(base_url: &str) -> anyhow::Result<Self> {
        let url = Url::parse(base_url.trim())
            .with_context(|| format!("invalid backend base URL: {base_url}"))?;

        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("backend base URL must be http or https: {base_url}");
        }

        Ok(Self { api_base_url: url })
    }
}

impl Default for Settings {
    fn default() -> Self {
        // The default URL is a compile-time constant and always parses.
        Self::with_base_url(DEFAULT_API_BASE_URL).expect("default base URL is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let settings = Settings::default();
        assert_eq!(settings.api_base_url.as_str(), "http://localhost:8000/");
    }

    #[test]
    fn test_with_base_url_validation() {
        assert!(Settings::with_base_url("https://api.example.com").is_ok());
        assert!(Settings::with_base_url("ftp://example.com").is_err());
        assert!(Settings::with_base_url("not a url").is_err());
    }
}
