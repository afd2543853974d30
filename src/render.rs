//! HTML fragments for embedding search results in a page.
//!
//! Results and the no-results notice are mutually exclusive blocks; error
//! display is the caller's concern.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::model::{Recipe, PLACEHOLDER_IMAGE};
use crate::pipeline::count_label;

/// One result card.
///
/// The image falls back to the placeholder both when the record has no URL
/// and, via `onerror`, when the URL turns out to be dead.
pub fn recipe_card(recipe: &Recipe) -> String {
    let title = recipe.display_title();
    format!(
        concat!(
            "<div class=\"recipe-card\">",
            "<img src=\"{src}\" alt=\"{alt}\" class=\"recipe-image\" ",
            "onerror=\"this.src='{placeholder}'\">",
            "<div class=\"recipe-content\">",
            "<h3 class=\"recipe-title\">{title}</h3>",
            "<div class=\"recipe-info\">",
            "<div class=\"info-item\"><strong>Difficulty:</strong> {difficulty}</div>",
            "</div>",
            "</div></div>"
        ),
        src = encode_double_quoted_attribute(recipe.image_url()),
        alt = encode_double_quoted_attribute(title),
        placeholder = PLACEHOLDER_IMAGE,
        title = encode_text(title),
        difficulty = encode_text(recipe.display_difficulty()),
    )
}

/// The full results fragment: count heading plus cards, or the no-results
/// block when the list is empty.
pub fn render_results(recipes: &[Recipe]) -> String {
    if recipes.is_empty() {
        return "<div class=\"no-results\">No recipes found. Try a different search.</div>"
            .to_string();
    }

    let cards: String = recipes.iter().map(recipe_card).collect();
    format!(
        concat!(
            "<div class=\"results-section\">",
            "<h2 class=\"results-count\">{count}</h2>",
            "<div class=\"recipes-container\">{cards}</div>",
            "</div>"
        ),
        count = count_label(recipes.len()),
        cards = cards,
    )
}
