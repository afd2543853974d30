use serde::{Deserialize, Serialize};

/// Image shown when a recipe record carries no usable image URL.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200?text=No+Image";

/// Rank assigned to difficulty values outside the known set.
/// Must sort after every known rank.
pub const UNKNOWN_DIFFICULTY_RANK: u8 = 99;

/// A recipe record as returned by The Vegan Recipes DB.
///
/// The API owns this shape, not us: every field is optional and unknown
/// fields are ignored. Recipes have no identity beyond these fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Recipe {
    /// Title for display, falling back to a fixed label.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled Recipe")
    }

    /// Difficulty for display, falling back to "N/A".
    pub fn display_difficulty(&self) -> &str {
        self.difficulty.as_deref().unwrap_or("N/A")
    }

    /// Image URL for display, falling back to [`PLACEHOLDER_IMAGE`].
    pub fn image_url(&self) -> &str {
        self.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Position of this recipe in the fixed difficulty order
    /// Easy < Medium < "A challenge" < anything else.
    ///
    /// Lookup is exact-match on the stored string; unrecognized or missing
    /// values all get [`UNKNOWN_DIFFICULTY_RANK`].
    pub fn difficulty_rank(&self) -> u8 {
        match self.difficulty.as_deref() {
            Some("Easy") => 1,
            Some("Medium") => 2,
            Some("A challenge") => 3,
            _ => UNKNOWN_DIFFICULTY_RANK,
        }
    }

    /// Title lowered for comparisons, with a missing title treated as empty.
    pub(crate) fn title_key(&self) -> String {
        self.title.as_deref().unwrap_or_default().to_lowercase()
    }
}
