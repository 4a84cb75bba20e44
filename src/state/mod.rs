/// State management module
///
/// This module handles all gallery state, including:
/// - Shared data structures (data.rs)
/// - The read-only photo catalog (catalog.rs)
/// - Filter state and visible-set derivation (filter.rs)
/// - Layout, filter panel and lightbox state (view.rs)
/// - The viewing session tying them together (gallery.rs)

pub mod catalog;
pub mod data;
pub mod filter;
pub mod gallery;
pub mod view;

pub use catalog::Catalog;
pub use gallery::Gallery;

#[cfg(test)]
pub(crate) fn test_photo(id: i64, category: data::Category, year: i32) -> data::Photo {
    data::Photo {
        id,
        title: format!("Photo {}", id),
        src: std::path::PathBuf::from(format!("{}.jpg", id)),
        category,
        year,
        description: None,
        available: true,
    }
}
