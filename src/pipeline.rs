use crate::model::Recipe;

/// Sort order applied after filtering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Keep the order the API returned (default)
    #[default]
    Relevance,
    /// Title A to Z, case-insensitive
    TitleAsc,
    /// Title Z to A, case-insensitive
    TitleDesc,
    /// Easy < Medium < "A challenge" < everything else
    Difficulty,
}

impl SortKey {
    /// Map a selector value to a sort key.
    ///
    /// Unrecognized values mean "do not reorder" and fall back to
    /// [`SortKey::Relevance`].
    pub fn from_key(key: &str) -> Self {
        match key {
            "title-asc" => SortKey::TitleAsc,
            "title-desc" => SortKey::TitleDesc,
            "difficulty" => SortKey::Difficulty,
            _ => SortKey::Relevance,
        }
    }

    /// The canonical selector value for this key.
    pub fn as_key(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::TitleAsc => "title-asc",
            SortKey::TitleDesc => "title-desc",
            SortKey::Difficulty => "difficulty",
        }
    }
}

/// Apply the difficulty filter and sort order to a fetched recipe list.
///
/// Pure: the input is untouched and a new Vec comes back. With no filter
/// every recipe is retained; a recipe with no difficulty value is retained
/// under ANY filter — absence of data never excludes.
pub fn refine(recipes: &[Recipe], difficulty_filter: Option<&str>, sort: SortKey) -> Vec<Recipe> {
    let filtered = filter_by_difficulty(recipes, difficulty_filter);
    sort_recipes(filtered, sort)
}

fn filter_by_difficulty(recipes: &[Recipe], difficulty_filter: Option<&str>) -> Vec<Recipe> {
    let wanted = match difficulty_filter.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_lowercase(),
        _ => return recipes.to_vec(),
    };

    recipes
        .iter()
        .filter(|recipe| match &recipe.difficulty {
            Some(difficulty) => difficulty.to_lowercase() == wanted,
            None => true,
        })
        .cloned()
        .collect()
}

// Vec::sort_by is stable, which the difficulty order relies on: every
// unknown value shares one sentinel rank and must keep its input order.
fn sort_recipes(mut recipes: Vec<Recipe>, sort: SortKey) -> Vec<Recipe> {
    match sort {
        SortKey::TitleAsc => recipes.sort_by(|a, b| a.title_key().cmp(&b.title_key())),
        SortKey::TitleDesc => recipes.sort_by(|a, b| b.title_key().cmp(&a.title_key())),
        SortKey::Difficulty => recipes.sort_by_key(|r| r.difficulty_rank()),
        SortKey::Relevance => {}
    }
    recipes
}

/// The "Found N Recipe(s)" label, pluralized for every count except 1.
pub fn count_label(count: usize) -> String {
    let plural = if count != 1 { "s" } else { "" };
    format!("Found {} Recipe{}", count, plural)
}
