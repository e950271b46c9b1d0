//! Article rows and the enums the dashboard filters and sorts by.

mod mock;

pub use mock::seed_rows;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::table::{CategoryFilter, RowCollection, TableRow};

/// Lifecycle stage of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    Generated,
    Published,
    Scheduled,
    Archived,
}

impl ArticleStatus {
    /// Statuses in tab order.
    pub fn all() -> &'static [ArticleStatus] {
        &[
            ArticleStatus::Generated,
            ArticleStatus::Published,
            ArticleStatus::Scheduled,
            ArticleStatus::Archived,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ArticleStatus::Generated => "generated",
            ArticleStatus::Published => "published",
            ArticleStatus::Scheduled => "scheduled",
            ArticleStatus::Archived => "archived",
        }
    }

    /// Label of the dashboard tab showing this status.
    pub fn tab_label(&self) -> &'static str {
        match self {
            ArticleStatus::Generated => "Generated Articles",
            ArticleStatus::Published => "Published Articles",
            ArticleStatus::Scheduled => "Scheduled Articles",
            ArticleStatus::Archived => "Archived Articles",
        }
    }
}

impl FromStr for ArticleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "generated" => Ok(ArticleStatus::Generated),
            "published" => Ok(ArticleStatus::Published),
            "scheduled" => Ok(ArticleStatus::Scheduled),
            "archived" => Ok(ArticleStatus::Archived),
            other => Err(format!("unknown article status '{}'", other)),
        }
    }
}

/// Status filter shown as tabs.
pub type StatusFilter = CategoryFilter<ArticleStatus>;

impl CategoryFilter<ArticleStatus> {
    /// Maps a tab label to a filter by prefix (`"Published Articles"` ->
    /// published). Labels that name no status select everything.
    pub fn from_tab_label(label: &str) -> Self {
        ArticleStatus::all()
            .iter()
            .find(|status| {
                let word = status.tab_label().split(' ').next().unwrap_or_default();
                label.starts_with(word)
            })
            .map(|&status| CategoryFilter::Only(status))
            .unwrap_or(CategoryFilter::All)
    }
}

/// Numeric columns the table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Traffic,
    Words,
}

impl SortField {
    pub fn name(&self) -> &'static str {
        match self {
            SortField::Traffic => "traffic",
            SortField::Words => "words",
        }
    }
}

impl FromStr for SortField {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "traffic" => Ok(SortField::Traffic),
            "words" | "word_count" | "wordcount" => Ok(SortField::Words),
            _ => Err(TableError::UnsupportedSortField(s.trim().to_string())),
        }
    }
}

/// One article with its SEO metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRow {
    pub id: u64,
    pub title: String,
    pub keyword: String,
    /// Estimated monthly search traffic for the keyword.
    pub traffic: u64,
    /// Word count.
    pub words: u64,
    /// Display label, e.g. "20 hours ago" or "---".
    pub created_on: String,
    pub status: ArticleStatus,
}

impl TableRow for ArticleRow {
    type Category = ArticleStatus;
    type SortField = SortField;

    fn id(&self) -> u64 {
        self.id
    }

    fn category(&self) -> ArticleStatus {
        self.status
    }

    fn matches_search(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.keyword.to_lowercase().contains(needle)
    }

    fn sort_key(&self, field: SortField) -> u64 {
        match field {
            SortField::Traffic => self.traffic,
            SortField::Words => self.words,
        }
    }
}

/// The dashboard's view-model.
pub type ArticleTable = RowCollection<ArticleRow>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_labels_map_by_prefix() {
        assert_eq!(
            StatusFilter::from_tab_label("Generated Articles"),
            CategoryFilter::Only(ArticleStatus::Generated)
        );
        assert_eq!(
            StatusFilter::from_tab_label("Archived Articles"),
            CategoryFilter::Only(ArticleStatus::Archived)
        );
        assert_eq!(StatusFilter::from_tab_label("All"), CategoryFilter::All);
        assert_eq!(StatusFilter::from_tab_label(""), CategoryFilter::All);
    }

    #[test]
    fn sort_field_parsing() {
        assert_eq!("traffic".parse::<SortField>(), Ok(SortField::Traffic));
        assert_eq!("Words".parse::<SortField>(), Ok(SortField::Words));
        assert_eq!("word_count".parse::<SortField>(), Ok(SortField::Words));
        assert_eq!(
            "title".parse::<SortField>(),
            Err(TableError::UnsupportedSortField("title".to_string()))
        );
    }

    #[test]
    fn status_round_trips_through_json() {
        let row = &seed_rows()[3];
        let json = serde_json::to_string(row).unwrap();
        assert!(json.contains("\"status\":\"published\""));
        let back: ArticleRow = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, row);
    }

    #[test]
    fn search_matches_title_or_keyword() {
        let rows = seed_rows();
        assert!(rows[0].matches_search("league"));
        assert!(rows[3].matches_search("executive"));
        assert!(rows[4].matches_search("graphic design services"));
        assert!(!rows[4].matches_search("league"));
    }
}
