use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use dotenvy::dotenv;

use resources_client::BASE_URL_ENV;

/// Quiet period after the last keystroke before search applies.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Locator configuration, loaded once at startup and passed by value.
#[derive(Debug, Clone)]
pub struct LocatorConfig {
    pub api_base_url: String,
    pub search_debounce: Duration,
    pub load_filter_options: bool,
}

impl LocatorConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            search_debounce: DEFAULT_DEBOUNCE,
            load_filter_options: false,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup (process env, build-time env)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_base_url = lookup(BASE_URL_ENV)
            .filter(|v| !v.trim().is_empty())
            .with_context(|| format!("{} must be set", BASE_URL_ENV))?;

        let search_debounce = match lookup("RESOURCES_SEARCH_DEBOUNCE_MS") {
            Some(ms) => Duration::from_millis(
                ms.trim()
                    .parse()
                    .context("RESOURCES_SEARCH_DEBOUNCE_MS must be a number of milliseconds")?,
            ),
            None => DEFAULT_DEBOUNCE,
        };

        let load_filter_options = match lookup("RESOURCES_LOAD_FILTER_OPTIONS") {
            Some(flag) => flag
                .trim()
                .parse()
                .context("RESOURCES_LOAD_FILTER_OPTIONS must be true or false")?,
            None => false,
        };

        Ok(Self {
            api_base_url,
            search_debounce,
            load_filter_options,
        })
    }
}
