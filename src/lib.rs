pub mod config;
pub mod error;
pub mod fetcher;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod session;

pub use config::ApiConfig;
pub use error::SearchError;
pub use fetcher::{HttpFetcher, LoadingIndicator, LogIndicator, RecipeSource};
pub use model::Recipe;
pub use pipeline::{count_label, refine, SortKey};
pub use render::{recipe_card, render_results};
pub use session::SearchSession;

/// One-shot search against the configured API.
///
/// Loads configuration, refuses to run without an API key, then fetches the
/// collection and applies the title filter. Use [`SearchSession`] instead
/// when filter or sort selections need to change without re-fetching.
pub async fn search_recipes(query: &str) -> Result<Vec<Recipe>, SearchError> {
    let config = ApiConfig::load()?;
    let fetcher = HttpFetcher::new(&config)?;
    fetcher.search(query).await
}
