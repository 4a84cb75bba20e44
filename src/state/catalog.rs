use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use super::data::Photo;
use super::filter;
use crate::error::{GalleryError, Result};

/// On-disk shape of a catalog file
#[derive(Deserialize)]
struct CatalogFile {
    photos: Vec<Photo>,
}

/// The Catalog is the read-only, ordered list of photos for a session.
/// It is loaded once from a JSON file and never mutated afterwards.
#[derive(Clone)]
pub struct Catalog {
    photos: Arc<[Photo]>,
    source: Option<PathBuf>,
}

impl Catalog {
    /// Build a catalog from photos already in memory.
    /// Fails if two photos share an id.
    pub fn from_photos(photos: Vec<Photo>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(photos.len());
        for photo in &photos {
            if !seen.insert(photo.id) {
                return Err(GalleryError::DuplicateId(photo.id));
            }
        }

        Ok(Catalog {
            photos: photos.into(),
            source: None,
        })
    }

    /// Parse catalog JSON that was read from `path`.
    ///
    /// Relative `src` paths are resolved against the file's directory, and
    /// every photo is checked for an existing image file.
    pub fn parse(json: &str, path: &Path) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json).map_err(|source| GalleryError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        let mut photos = file.photos;
        for photo in &mut photos {
            if photo.src.is_relative() {
                photo.src = base_dir.join(&photo.src);
            }
            photo.available = photo.src.is_file();
        }

        let missing = photos.iter().filter(|photo| !photo.available).count();
        if missing > 0 {
            warn!(missing, catalog = %path.display(), "Some catalog images do not exist on disk");
        }

        let mut catalog = Self::from_photos(photos)?;
        catalog.source = Some(path.to_path_buf());
        Ok(catalog)
    }

    /// Read and parse a catalog file (blocking)
    pub fn open(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| GalleryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::parse(&json, path)?;
        info!(photos = catalog.len(), catalog = %path.display(), "Catalog loaded");
        Ok(catalog)
    }

    /// All photos in catalog order
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn get(&self, index: usize) -> Option<&Photo> {
        self.photos.get(index)
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// The file this catalog was read from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Distinct years, most recent first
    pub fn years(&self) -> Vec<i32> {
        filter::extract_years(&self.photos)
    }
}

// Implement Debug without dumping every photo
impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("photos", &self.photos.len())
            .field("source", &self.source)
            .finish()
    }
}

/// Load a catalog off the UI thread.
/// Errors are flattened to strings so they can travel inside a `Message`.
pub async fn load(path: PathBuf) -> std::result::Result<Catalog, String> {
    // Spawn blocking because reading and checking image files touches the disk
    tokio::task::spawn_blocking(move || Catalog::open(&path).map_err(|e| e.to_string()))
        .await
        .map_err(|e| format!("Task join error: {}", e))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::Category;
    use crate::state::test_photo;
    use std::fs;

    const SAMPLE: &str = r#"{
        "photos": [
            { "id": 1, "title": "Opening night", "src": "img/one.jpg", "category": "event", "year": 2023 },
            { "id": 2, "title": "Hack all night", "src": "img/two.jpg", "category": "hackathon", "year": 2023,
              "description": "48 hours of code" },
            { "id": 3, "title": "Rust 101", "src": "/nowhere/three.jpg", "category": "workshop", "year": 2022 }
        ]
    }"#;

    #[test]
    fn test_parse_keeps_order_and_fields() {
        let catalog = Catalog::parse(SAMPLE, Path::new("/gallery/catalog.json")).unwrap();
        let ids: Vec<i64> = catalog.photos().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(catalog.photos()[1].category, Category::Hackathon);
        assert_eq!(catalog.photos()[1].description.as_deref(), Some("48 hours of code"));
        assert_eq!(catalog.photos()[0].description, None);
        assert_eq!(catalog.source(), Some(Path::new("/gallery/catalog.json")));
    }

    #[test]
    fn test_relative_src_resolved_against_catalog_dir() {
        let catalog = Catalog::parse(SAMPLE, Path::new("/gallery/catalog.json")).unwrap();
        assert_eq!(catalog.photos()[0].src, PathBuf::from("/gallery/img/one.jpg"));
        assert_eq!(catalog.photos()[2].src, PathBuf::from("/nowhere/three.jpg"));
    }

    #[test]
    fn test_unknown_category_is_parse_error() {
        let json = r#"{ "photos": [ { "id": 1, "title": "x", "src": "x.jpg", "category": "party", "year": 2020 } ] }"#;
        let err = Catalog::parse(json, Path::new("c.json")).unwrap_err();
        assert!(matches!(err, GalleryError::Parse { .. }));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let photos = vec![
            test_photo(7, Category::Event, 2020),
            test_photo(7, Category::Workshop, 2021),
        ];
        let err = Catalog::from_photos(photos).unwrap_err();
        assert!(matches!(err, GalleryError::DuplicateId(7)));
    }

    #[test]
    fn test_open_checks_image_availability() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("img")).unwrap();
        fs::write(dir.path().join("img/one.jpg"), b"not really a jpeg").unwrap();
        let catalog_path = dir.path().join("catalog.json");
        fs::write(&catalog_path, SAMPLE).unwrap();

        let catalog = Catalog::open(&catalog_path).unwrap();
        let available: Vec<bool> = catalog.photos().iter().map(|p| p.available).collect();
        assert_eq!(available, vec![true, false, false]);
        // Missing images still take part in filtering
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.years(), vec![2023, 2022]);
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::open(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, GalleryError::Io { .. }));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::parse(r#"{ "photos": [] }"#, Path::new("c.json")).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.years().is_empty());
    }
}
