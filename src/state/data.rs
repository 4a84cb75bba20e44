/// Shared data structures for the application state
///
/// These types represent the data model that flows between
/// the catalog file, the filter/view state and the UI layer.

use serde::Deserialize;
use std::path::PathBuf;

/// The closed set of photo categories
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Event,
    Hackathon,
    Workshop,
}

impl Category {
    /// Every category, in the order the filter panel lists them
    pub const ALL: [Category; 3] = [Category::Event, Category::Hackathon, Category::Workshop];

    /// Singular display name (e.g. on a card badge)
    pub fn label(&self) -> &'static str {
        match self {
            Category::Event => "Event",
            Category::Hackathon => "Hackathon",
            Category::Workshop => "Workshop",
        }
    }

    /// Plural display name used by the filter buttons
    pub fn plural_label(&self) -> &'static str {
        match self {
            Category::Event => "Events",
            Category::Hackathon => "Hackathons",
            Category::Workshop => "Workshops",
        }
    }
}

/// A filter selector: either everything, or exactly one value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    /// `All` matches any value, `Only(x)` matches exactly `x`
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(expected) => expected == value,
        }
    }
}

/// Category selector of the filter panel
pub type CategoryFilter = Selection<Category>;

/// Year selector of the filter panel
pub type YearFilter = Selection<i32>;

/// Represents a single photo in the catalog
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Photo {
    /// Unique, stable identifier
    pub id: i64,
    /// Display title
    pub title: String,
    /// Path to the image file (resolved against the catalog directory on load)
    pub src: PathBuf,
    pub category: Category,
    pub year: i32,
    /// Optional longer text shown in the lightbox
    #[serde(default)]
    pub description: Option<String>,
    /// Whether `src` pointed at an existing file when the catalog was loaded
    #[serde(skip)]
    pub available: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_all_matches_everything() {
        let any: YearFilter = Selection::All;
        assert!(any.matches(&2021));
        assert!(any.matches(&-1));
    }

    #[test]
    fn test_selection_only_matches_exact_value() {
        let only = CategoryFilter::Only(Category::Workshop);
        assert!(only.matches(&Category::Workshop));
        assert!(!only.matches(&Category::Event));
    }

    #[test]
    fn test_default_selection_is_all() {
        assert_eq!(CategoryFilter::default(), Selection::All);
        assert_eq!(YearFilter::default(), Selection::All);
    }

    #[test]
    fn test_category_deserializes_lowercase() {
        let category: Category = serde_json::from_str("\"hackathon\"").unwrap();
        assert_eq!(category, Category::Hackathon);
        assert!(serde_json::from_str::<Category>("\"party\"").is_err());
    }

    #[test]
    fn test_plural_labels() {
        let labels: Vec<_> = Category::ALL.iter().map(|c| c.plural_label()).collect();
        assert_eq!(labels, vec!["Events", "Hackathons", "Workshops"]);
    }
}
