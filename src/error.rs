//! Error types for the row-collection view-model.

/// Invalid input rejected by the view-model.
///
/// Every variant is raised synchronously and leaves the view-model state
/// untouched; the caller decides how to surface the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Requested page size is not one of the configured options.
    UnsupportedPageSize { requested: usize, allowed: Vec<usize> },
    /// Sort field is unknown or not numeric.
    UnsupportedSortField(String),
    /// Two rows share the same identity.
    DuplicateRowId(u64),
    /// Action references a row that is not in the collection.
    UnknownRow(u64),
    /// Table configuration is malformed.
    InvalidConfig(String),
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::UnsupportedPageSize { requested, allowed } => {
                let allowed: Vec<String> = allowed.iter().map(|s| s.to_string()).collect();
                write!(
                    f,
                    "unsupported page size {} (allowed: {})",
                    requested,
                    allowed.join(", ")
                )
            }
            TableError::UnsupportedSortField(name) => {
                write!(f, "cannot sort by '{}': only traffic and words are sortable", name)
            }
            TableError::DuplicateRowId(id) => write!(f, "duplicate row id {}", id),
            TableError::UnknownRow(id) => write!(f, "no row with id {}", id),
            TableError::InvalidConfig(msg) => write!(f, "invalid table config: {}", msg),
        }
    }
}

impl std::error::Error for TableError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_message_lists_allowed_values() {
        let err = TableError::UnsupportedPageSize {
            requested: 7,
            allowed: vec![10, 25, 50],
        };
        assert_eq!(
            err.to_string(),
            "unsupported page size 7 (allowed: 10, 25, 50)"
        );
    }

    #[test]
    fn sort_field_message_names_field() {
        let err = TableError::UnsupportedSortField("title".to_string());
        assert!(err.to_string().contains("'title'"));
    }
}
