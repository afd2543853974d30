use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderName};
use reqwest::Client;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::SearchError;
use crate::model::Recipe;

const API_KEY_HEADER: &str = "x-rapidapi-key";
const API_HOST_HEADER: &str = "x-rapidapi-host";

/// Anything that can answer a recipe search
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Fetch the collection and keep only recipes matching `query`.
    ///
    /// An empty or whitespace-only query returns the full collection in
    /// original order.
    async fn search(&self, query: &str) -> Result<Vec<Recipe>, SearchError>;
}

/// Collaborator notified while a fetch is in flight.
///
/// Shown for the duration of the call and hidden again on both the success
/// and the failure path.
pub trait LoadingIndicator: Send + Sync {
    fn set_loading(&self, visible: bool);
}

/// Indicator that reports through the log facade.
pub struct LogIndicator;

impl LoadingIndicator for LogIndicator {
    fn set_loading(&self, visible: bool) {
        if visible {
            debug!("Loading recipes...");
        } else {
            debug!("Loading finished");
        }
    }
}

/// Fetches the recipe collection from The Vegan Recipes DB over HTTP
pub struct HttpFetcher {
    client: Client,
    base_url: String,
    indicator: Option<Arc<dyn LoadingIndicator>>,
}

impl HttpFetcher {
    /// Create a fetcher from configuration.
    ///
    /// Fails with [`SearchError::MissingApiKey`] before anything else when
    /// the configuration carries no usable key.
    pub fn new(config: &ApiConfig) -> Result<Self, SearchError> {
        let api_key = config.require_api_key()?;
        Self::build(
            api_key,
            &config.base_url,
            &config.host,
            Duration::from_secs(config.timeout),
        )
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: &str, base_url: &str, host: &str) -> Result<Self, SearchError> {
        Self::build(api_key, base_url, host, Duration::from_secs(30))
    }

    fn build(
        api_key: &str,
        base_url: &str,
        host: &str,
        timeout: Duration,
    ) -> Result<Self, SearchError> {
        // RapidAPI auth travels in headers, never in the URL or body
        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key.parse()?);
        headers.insert(HeaderName::from_static(API_HOST_HEADER), host.parse()?);

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            indicator: None,
        })
    }

    /// Attach a loading indicator collaborator.
    pub fn with_indicator(mut self, indicator: Arc<dyn LoadingIndicator>) -> Self {
        self.indicator = Some(indicator);
        self
    }

    fn set_loading(&self, visible: bool) {
        if let Some(indicator) = &self.indicator {
            indicator.set_loading(visible);
        }
    }

    async fn request(&self, query: &str) -> Result<Vec<Recipe>, SearchError> {
        let url = format!("{}/", self.base_url);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Api {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let data: Value = serde_json::from_str(&body)?;

        // A non-array body is the "no results" condition, not an error
        let recipes: Vec<Recipe> = if data.is_array() {
            serde_json::from_value(data)?
        } else {
            Vec::new()
        };

        Ok(filter_by_title(recipes, query))
    }
}

#[async_trait]
impl RecipeSource for HttpFetcher {
    async fn search(&self, query: &str) -> Result<Vec<Recipe>, SearchError> {
        self.set_loading(true);
        let result = self.request(query).await;
        self.set_loading(false);
        result
    }
}

/// Keep recipes whose title contains `query`, case-insensitively.
///
/// A blank query keeps everything. Relative order is preserved and a
/// missing title is treated as empty text.
pub fn filter_by_title(recipes: Vec<Recipe>, query: &str) -> Vec<Recipe> {
    let query = query.trim();
    if query.is_empty() {
        return recipes;
    }

    let needle = query.to_lowercase();
    recipes
        .into_iter()
        .filter(|recipe| recipe.title_key().contains(&needle))
        .collect()
}
