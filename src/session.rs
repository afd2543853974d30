use log::debug;

use crate::error::SearchError;
use crate::fetcher::RecipeSource;
use crate::model::Recipe;
use crate::pipeline::{refine, SortKey};

/// One user-facing search: the most recent fetch result plus the current
/// filter and sort selections.
///
/// Filter and sort changes re-run the pipeline over the stored list without
/// touching the network; only [`search`](SearchSession::search) and
/// [`load_all`](SearchSession::load_all) fetch. Every view handed out is a
/// subset of the most recent fetch, never a union across searches.
///
/// `search` takes `&mut self`, so one session never has two fetches in
/// flight; the stored list always belongs to the last completed call.
pub struct SearchSession<S> {
    source: S,
    recipes: Vec<Recipe>,
    difficulty: Option<String>,
    sort: SortKey,
}

impl<S: RecipeSource> SearchSession<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            recipes: Vec::new(),
            difficulty: None,
            sort: SortKey::Relevance,
        }
    }

    /// Run a search and replace the stored result set wholesale.
    ///
    /// On failure the stored list is left as it was and no partial results
    /// are handed out.
    pub async fn search(&mut self, query: &str) -> Result<Vec<Recipe>, SearchError> {
        debug!("Searching for: {}", if query.trim().is_empty() { "all recipes" } else { query });
        let found = self.source.search(query).await?;
        self.recipes = found;
        Ok(self.results())
    }

    /// The "load all" trigger: clears the query and searches.
    pub async fn load_all(&mut self) -> Result<Vec<Recipe>, SearchError> {
        self.search("").await
    }

    /// Current refined view of the stored list.
    pub fn results(&self) -> Vec<Recipe> {
        refine(&self.recipes, self.difficulty.as_deref(), self.sort)
    }

    /// Change the difficulty filter and re-refine without re-fetching.
    pub fn set_difficulty(&mut self, difficulty: Option<String>) -> Vec<Recipe> {
        self.difficulty = difficulty;
        self.results()
    }

    /// Change the sort order and re-refine without re-fetching.
    pub fn set_sort(&mut self, sort: SortKey) -> Vec<Recipe> {
        self.sort = sort;
        self.results()
    }

    /// The "clear filters" trigger: difficulty back to any, sort back to
    /// relevance, then re-refine without re-fetching.
    pub fn clear_filters(&mut self) -> Vec<Recipe> {
        self.difficulty = None;
        self.sort = SortKey::Relevance;
        self.results()
    }

    pub fn difficulty(&self) -> Option<&str> {
        self.difficulty.as_deref()
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;

    struct StaticSource {
        recipes: Vec<Recipe>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl RecipeSource for StaticSource {
        async fn search(&self, query: &str) -> Result<Vec<Recipe>, SearchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(crate::fetcher::filter_by_title(self.recipes.clone(), query))
        }
    }

    struct FlakySource {
        recipes: Vec<Recipe>,
        fail: Arc<AtomicBool>,
    }

    #[async_trait]
    impl RecipeSource for FlakySource {
        async fn search(&self, query: &str) -> Result<Vec<Recipe>, SearchError> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(SearchError::Api { status: 500 });
            }
            Ok(crate::fetcher::filter_by_title(self.recipes.clone(), query))
        }
    }

    fn recipe(title: &str, difficulty: Option<&str>) -> Recipe {
        Recipe {
            title: Some(title.to_string()),
            difficulty: difficulty.map(String::from),
            image: None,
        }
    }

    fn session_with_calls() -> (SearchSession<StaticSource>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let source = StaticSource {
            recipes: vec![
                recipe("Tofu Stir Fry", Some("Easy")),
                recipe("Vegan Chili", Some("Medium")),
                recipe("Seitan Roast", None),
            ],
            calls: calls.clone(),
        };
        (SearchSession::new(source), calls)
    }

    #[tokio::test]
    async fn test_filter_changes_do_not_refetch() {
        let (mut session, calls) = session_with_calls();
        session.load_all().await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let easy = session.set_difficulty(Some("Easy".to_string()));
        let sorted = session.set_sort(SortKey::TitleAsc);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(easy.len(), 2);
        assert_eq!(sorted.len(), 2);
    }

    #[tokio::test]
    async fn test_clear_filters_resets_both_selections() {
        let (mut session, _calls) = session_with_calls();
        session.load_all().await.unwrap();
        session.set_difficulty(Some("Medium".to_string()));
        session.set_sort(SortKey::TitleDesc);

        let all = session.clear_filters();

        assert_eq!(all.len(), 3);
        assert_eq!(session.difficulty(), None);
        assert_eq!(session.sort(), SortKey::Relevance);
    }

    #[tokio::test]
    async fn test_search_replaces_prior_results() {
        let (mut session, _calls) = session_with_calls();
        let all = session.load_all().await.unwrap();
        assert_eq!(all.len(), 3);

        let chili = session.search("chili").await.unwrap();
        assert_eq!(chili.len(), 1);
        // the session holds only the latest fetch, not a union
        assert_eq!(session.results().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_search_keeps_prior_list() {
        let fail = Arc::new(AtomicBool::new(false));
        let mut session = SearchSession::new(FlakySource {
            recipes: vec![recipe("Vegan Chili", Some("Medium"))],
            fail: fail.clone(),
        });
        session.load_all().await.unwrap();
        assert_eq!(session.results().len(), 1);

        fail.store(true, Ordering::SeqCst);
        assert!(session.search("anything").await.is_err());

        // no partial results: the last successful fetch stays displayed
        assert_eq!(session.results().len(), 1);
    }

    #[tokio::test]
    async fn test_filters_apply_to_stored_list() {
        let (mut session, _calls) = session_with_calls();
        session.load_all().await.unwrap();

        let view = session.set_sort(SortKey::Difficulty);
        let titles: Vec<_> = view.iter().map(|r| r.display_title().to_string()).collect();
        assert_eq!(titles, ["Tofu Stir Fry", "Vegan Chili", "Seitan Roast"]);
    }
}
