//! Theme file discovery and loading.
//!
//! A theme file is TOML named `<theme>.toml` with a `[classes]` table:
//!
//! ```toml
//! [classes]
//! button = "btn btn-outline-secondary"
//! disabled = "disabled"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::theme::ThemeClasses;

#[derive(Debug, Default, Deserialize)]
struct ThemeFile {
    #[serde(default)]
    classes: ThemeClasses,
}

/// Loads named themes from a list of search paths.
#[derive(Debug, Default, Clone)]
pub struct ThemeLoader {
    search_paths: Vec<PathBuf>,
}

impl ThemeLoader {
    /// Create a loader with no search paths.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader with custom search paths.
    pub fn with_paths(paths: Vec<PathBuf>) -> Self {
        Self {
            search_paths: paths,
        }
    }

    /// Add a search path.
    pub fn add_search_path(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        if !self.search_paths.contains(&path) {
            self.search_paths.push(path);
        }
    }

    /// Get current search paths.
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Find the file for theme `name`, searching paths in order.
    pub fn find(&self, name: &str) -> Option<PathBuf> {
        let file_name = format!("{name}.toml");
        self.search_paths
            .iter()
            .map(|dir| dir.join(&file_name))
            .find(|path| path.is_file())
    }

    /// Load theme `name`.
    pub fn load(&self, name: &str) -> Result<ThemeClasses> {
        let path = self
            .find(name)
            .ok_or_else(|| Error::theme_not_found(name, self.search_paths.len()))?;
        Self::load_file(&path)
    }

    /// Load a theme from an explicit file.
    pub fn load_file(path: &Path) -> Result<ThemeClasses> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let file: ThemeFile = toml::from_str(&text).map_err(|e| Error::parse(path, e.to_string()))?;
        tracing::debug!(target: "transfer_list_style", path = %path.display(), "theme loaded");
        Ok(file.classes)
    }

    /// Load theme `name`, logging and falling back to the default theme on failure.
    pub fn load_or_default(&self, name: &str) -> ThemeClasses {
        match self.load(name) {
            Ok(theme) => theme,
            Err(err) => {
                tracing::warn!(target: "transfer_list_style", theme = name, error = %err, "using default theme");
                ThemeClasses::default()
            }
        }
    }
}
