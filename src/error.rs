use thiserror::Error;

/// Errors that can occur during recipe search operations
#[derive(Error, Debug)]
pub enum SearchError {
    /// No API key in configuration; fatal to all search operations
    #[error("API key not configured. Set RECIPES__API_KEY or add api_key to config.toml")]
    MissingApiKey,

    /// The recipe API answered with a non-success status
    #[error("API error: {status}")]
    Api { status: u16 },

    /// Transport-level failure talking to the recipe API
    #[error("Failed to fetch recipes: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Response body was not valid JSON
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid header value built from configuration
    #[error("Header parse error: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
