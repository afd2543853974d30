use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::error::SearchError;

/// Settings for talking to The Vegan Recipes DB API
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// RapidAPI key; searches refuse to run without one
    pub api_key: Option<String>,
    /// Base URL of the recipe collection endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Value sent in the X-RapidAPI-Host header
    #[serde(default = "default_host")]
    pub host: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            host: default_host(),
            timeout: default_timeout(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://the-vegan-recipes-db.p.rapidapi.com".to_string()
}

fn default_host() -> String {
    "the-vegan-recipes-db.p.rapidapi.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl ApiConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPES__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPES__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("RECIPES")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// The API key, or [`SearchError::MissingApiKey`] when absent or blank.
    ///
    /// Checked before any request is attempted; there is no retry path for
    /// a missing key.
    pub fn require_api_key(&self) -> Result<&str, SearchError> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(SearchError::MissingApiKey),
        }
    }
}
