//! Provider abstraction for article data sources.
//!
//! The dashboard works with any [`ArticleProvider`]:
//! - `MockProvider`: built-in sample rows
//! - `JsonFileProvider`: rows read from a JSON file, reloadable

mod file;
mod mock;

pub use file::JsonFileProvider;
pub use mock::MockProvider;

use crate::model::ArticleRow;

/// Error types that can occur while loading rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// I/O error while reading data.
    Io(String),
    /// Error parsing stored data.
    Parse(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(msg) => write!(f, "I/O error: {}", msg),
            LoadError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {}

/// Source of the article collection.
pub trait ArticleProvider {
    /// Loads the full collection.
    fn load(&self) -> Result<Vec<ArticleRow>, LoadError>;

    /// Short description for logs and the status line.
    fn describe(&self) -> String;

    /// Whether loading again can yield different rows.
    fn is_reloadable(&self) -> bool {
        false
    }
}
