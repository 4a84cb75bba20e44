/// Filter state and the pure functions that derive what the gallery shows
///
/// - `FilterState` holds the two independent selectors (category, year)
/// - `visible_indices` is the filter engine: catalog + state -> visible set
/// - `extract_years` builds the options of the year selector

use std::collections::BTreeSet;

use super::data::{CategoryFilter, Photo, YearFilter};

/// The pair of user-selected constraints. Starts as (All, All).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub year: YearFilter,
}

impl FilterState {
    /// Both selectors must accept the photo
    pub fn matches(&self, photo: &Photo) -> bool {
        self.category.matches(&photo.category) && self.year.matches(&photo.year)
    }
}

/// Derive the visible set as catalog indices, in catalog order.
///
/// Pure: the same photos and state always give the same result.
/// No match yields an empty vector, never an error.
pub fn visible_indices(photos: &[Photo], state: &FilterState) -> Vec<usize> {
    photos
        .iter()
        .enumerate()
        .filter(|(_, photo)| state.matches(photo))
        .map(|(index, _)| index)
        .collect()
}

/// Distinct years present in the catalog, most recent first
pub fn extract_years(photos: &[Photo]) -> Vec<i32> {
    let years: BTreeSet<i32> = photos.iter().map(|photo| photo.year).collect();
    years.into_iter().rev().collect()
}
