use crate::catalog::normalize_base_url;
use reqwest::Url;
use std::path::Path;
use thiserror::Error;

/// Environment variable naming the catalog API base URL
pub const API_URL_VAR: &str = "MAESTRO_API_URL";

/// Used when the base URL is set neither at runtime nor at build time
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/";

/// Environment variable holding the tracing filter
pub const LOG_FILTER_VAR: &str = "RUST_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid API URL {url:?}: {reason}")]
    InvalidApiUrl { url: String, reason: String },
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Catalog API base URL, always ending in '/'
    pub api_url: Url,
}

impl Config {
    /// Reads the process environment. Call [`load_dotenv`] first so values
    /// from a .env file are visible.
    pub fn load() -> Result<Self, ConfigError> {
        let api_url = resolve_api_url(std::env::var(API_URL_VAR).ok());
        Self::from_api_url(&api_url)
    }

    pub fn from_api_url(raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        let invalid = |reason: String| ConfigError::InvalidApiUrl {
            url: raw.to_string(),
            reason,
        };

        let api_url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;

        if api_url.scheme() != "http" && api_url.scheme() != "https" {
            return Err(invalid(format!(
                "unsupported scheme '{}'",
                api_url.scheme()
            )));
        }

        if api_url.query().is_some() || api_url.fragment().is_some() {
            return Err(invalid(
                "query strings and fragments are not supported".to_string(),
            ));
        }

        Ok(Self {
            api_url: normalize_base_url(api_url),
        })
    }
}

/// In debug builds, load a .env file from the working directory into the
/// process environment. Returns whether one was loaded. Must run before the
/// tracing subscriber is installed so a RUST_LOG set there takes effect.
pub fn load_dotenv() -> bool {
    #[cfg(debug_assertions)]
    {
        load_env_file(Path::new(".env"))
    }

    #[cfg(not(debug_assertions))]
    {
        false
    }
}

/// Tracing filter from RUST_LOG, defaulting to info
pub fn log_filter() -> String {
    filter_from_var(LOG_FILTER_VAR)
}

fn filter_from_var(var: &str) -> String {
    std::env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Existing environment variables are not overridden
#[cfg_attr(not(debug_assertions), allow(dead_code))]
fn load_env_file(path: &Path) -> bool {
    dotenvy::from_path(path).is_ok()
}

/// Runtime value wins over the value baked in at build time
fn resolve_api_url(runtime: Option<String>) -> String {
    runtime
        .filter(|v| !v.trim().is_empty())
        .or_else(|| option_env!("MAESTRO_API_URL").map(str::to_string))
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}
