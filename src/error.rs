use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while loading the catalog or settings.
///
/// Filtering and view-state updates never fail; only file input does.
#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate photo id {0} in catalog")]
    DuplicateId(i64),

    #[error("Invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, GalleryError>;
