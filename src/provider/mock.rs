//! Provider serving the built-in sample rows.

use crate::model::{ArticleRow, seed_rows};

use super::{ArticleProvider, LoadError};

/// Serves [`seed_rows`]; never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockProvider;

impl MockProvider {
    pub fn new() -> Self {
        Self
    }
}

impl ArticleProvider for MockProvider {
    fn load(&self) -> Result<Vec<ArticleRow>, LoadError> {
        Ok(seed_rows())
    }

    fn describe(&self) -> String {
        "built-in sample articles".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serves_seed_rows() {
        let provider = MockProvider::new();
        let rows = provider.load().unwrap();
        assert_eq!(rows.len(), 5);
        assert!(!provider.is_reloadable());
    }
}
