//! Provider reading rows from a JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::model::ArticleRow;

use super::{ArticleProvider, LoadError};

/// Reads a JSON array of [`ArticleRow`] on every load.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ArticleProvider for JsonFileProvider {
    fn load(&self) -> Result<Vec<ArticleRow>, LoadError> {
        debug!(path = %self.path.display(), "reading articles");
        let data = fs::read_to_string(&self.path)
            .map_err(|e| LoadError::Io(format!("{}: {}", self.path.display(), e)))?;
        let rows: Vec<ArticleRow> = serde_json::from_str(&data)
            .map_err(|e| LoadError::Parse(format!("{}: {}", self.path.display(), e)))?;
        info!(path = %self.path.display(), rows = rows.len(), "loaded articles");
        Ok(rows)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn is_reloadable(&self) -> bool {
        true
    }
}
