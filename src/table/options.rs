//! Filter, sort and paging specifications plus table configuration.

use std::cmp::Ordering;

use serde::Serialize;

use crate::error::TableError;

/// Page sizes offered by the dashboard.
pub const DEFAULT_PAGE_SIZES: [usize; 3] = [10, 25, 50];

/// Page size used until the user picks another one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Allowed page sizes and the initial choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub page_sizes: Vec<usize>,
    pub default_page_size: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_sizes: DEFAULT_PAGE_SIZES.to_vec(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TableConfig {
    /// Builds a validated config.
    pub fn new(page_sizes: Vec<usize>, default_page_size: usize) -> Result<Self, TableError> {
        let config = Self {
            page_sizes,
            default_page_size,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that the option set is non-empty, positive, free of duplicates
    /// and contains the default.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.page_sizes.is_empty() {
            return Err(TableError::InvalidConfig(
                "page size list is empty".to_string(),
            ));
        }
        if self.page_sizes.contains(&0) {
            return Err(TableError::InvalidConfig(
                "page sizes must be positive".to_string(),
            ));
        }
        for (i, size) in self.page_sizes.iter().enumerate() {
            if self.page_sizes[..i].contains(size) {
                return Err(TableError::InvalidConfig(format!(
                    "page size {} listed twice",
                    size
                )));
            }
        }
        if !self.page_sizes.contains(&self.default_page_size) {
            return Err(TableError::InvalidConfig(format!(
                "default page size {} is not among the allowed sizes",
                self.default_page_size
            )));
        }
        Ok(())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Applies the direction to an ascending comparison.
    /// Equal stays equal, so a stable sort keeps ties in input order either way.
    pub fn apply(self, ascending: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ascending,
            SortDirection::Descending => ascending.reverse(),
        }
    }

    /// Header indicator.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// Active sort field (`None` keeps insertion order) and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec<F> {
    pub field: Option<F>,
    pub direction: SortDirection,
}

impl<F> Default for SortSpec<F> {
    fn default() -> Self {
        Self {
            field: None,
            direction: SortDirection::Descending,
        }
    }
}

/// Category filter: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl<C: PartialEq> CategoryFilter<C> {
    pub fn matches(&self, category: &C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

/// Relative page navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMove {
    Previous,
    Next,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = TableConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.page_sizes, vec![10, 25, 50]);
        assert_eq!(config.default_page_size, 10);
    }

    #[test]
    fn config_rejects_default_outside_options() {
        let err = TableConfig::new(vec![10, 25], 50).unwrap_err();
        assert!(matches!(err, TableError::InvalidConfig(_)));
    }

    #[test]
    fn config_rejects_zero_empty_and_duplicates() {
        assert!(TableConfig::new(vec![], 10).is_err());
        assert!(TableConfig::new(vec![0, 10], 10).is_err());
        assert!(TableConfig::new(vec![10, 10], 10).is_err());
    }

    #[test]
    fn descending_reverses_but_keeps_ties() {
        let d = SortDirection::Descending;
        assert_eq!(d.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(d.apply(Ordering::Equal), Ordering::Equal);
        assert_eq!(d.toggled(), SortDirection::Ascending);
        assert_eq!(d.toggled().toggled(), d);
    }

    #[test]
    fn category_filter_matching() {
        assert!(CategoryFilter::<u8>::All.matches(&3));
        assert!(CategoryFilter::Only(3u8).matches(&3));
        assert!(!CategoryFilter::Only(3u8).matches(&4));
    }
}
