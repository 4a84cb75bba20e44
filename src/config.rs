/// Application settings loaded from an optional `config.toml`.
///
/// Lookup order for the file:
/// 1. An explicit path (the `--config` flag)
/// 2. `$GALLERY_VIEWER_CONFIG_DIR/config.toml`
/// 3. The platform config directory, e.g. `~/.config/gallery-viewer/config.toml`
///
/// A missing file means defaults. A broken file also means defaults, plus a
/// warning for the caller to log.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{GalleryError, Result};

const APP_DIR: &str = "gallery-viewer";
const CONFIG_FILE: &str = "config.toml";
const CATALOG_FILE: &str = "catalog.json";
const CONFIG_DIR_ENV: &str = "GALLERY_VIEWER_CONFIG_DIR";

/// Widths at or below this many logical pixels count as narrow
pub const DEFAULT_NARROW_BREAKPOINT: f32 = 768.0;
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Catalog file to open at startup
    pub catalog: Option<PathBuf>,
    pub narrow_breakpoint: f32,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            narrow_breakpoint: DEFAULT_NARROW_BREAKPOINT,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl Config {
    /// Parse settings from TOML text read from `path`
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|e| GalleryError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Replace values that make no sense with their defaults.
    /// Returns a description of what was replaced, if anything.
    pub fn sanitize(&mut self) -> Option<String> {
        let mut fixed = Vec::new();

        if !(self.narrow_breakpoint > 0.0) {
            fixed.push(format!("narrow_breakpoint = {}", self.narrow_breakpoint));
            self.narrow_breakpoint = DEFAULT_NARROW_BREAKPOINT;
        }
        if !(self.window_width > 0.0) {
            fixed.push(format!("window_width = {}", self.window_width));
            self.window_width = DEFAULT_WINDOW_WIDTH;
        }
        if !(self.window_height > 0.0) {
            fixed.push(format!("window_height = {}", self.window_height));
            self.window_height = DEFAULT_WINDOW_HEIGHT;
        }

        if fixed.is_empty() {
            None
        } else {
            Some(format!("Using defaults instead of {}", fixed.join(", ")))
        }
    }

    /// Catalog to open: the command line wins, then the config file,
    /// then the platform data directory
    pub fn resolve_catalog(&self, cli: Option<PathBuf>) -> Option<PathBuf> {
        cli.or_else(|| self.catalog.clone())
            .or_else(default_catalog_path)
    }
}

/// Directory holding `config.toml`
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

/// Default catalog location, e.g. `~/.local/share/gallery-viewer/catalog.json`
pub fn default_catalog_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR).join(CATALOG_FILE))
}

/// Load settings from an explicit file. A missing file yields defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    match std::fs::read_to_string(path) {
        Ok(text) => Config::parse(&text, path),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
        Err(source) => Err(GalleryError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load settings, never failing. The second value is a warning to log.
pub fn load(explicit: Option<&Path>) -> (Config, Option<String>) {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match config_dir() {
            Some(dir) => dir.join(CONFIG_FILE),
            None => return (Config::default(), None),
        },
    };

    let (mut config, load_warning) = match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e.to_string())),
    };

    let warning = match (load_warning, config.sanitize()) {
        (Some(a), Some(b)) => Some(format!("{}; {}", a, b)),
        (a, b) => a.or(b),
    };
    (config, warning)
}
