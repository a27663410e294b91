//! Error types for the styling system.

use std::path::PathBuf;

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading themes.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No theme file with this name exists on any search path.
    #[error("Theme '{name}' not found in {searched} search path(s)")]
    ThemeNotFound { name: String, searched: usize },

    /// File I/O error.
    #[error("Failed to read theme '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Theme file parse error.
    #[error("Failed to parse theme '{path}': {message}")]
    Parse { path: PathBuf, message: String },
}

impl Error {
    /// Create a not-found error.
    pub fn theme_not_found(name: impl Into<String>, searched: usize) -> Self {
        Self::ThemeNotFound {
            name: name.into(),
            searched,
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error.
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}
