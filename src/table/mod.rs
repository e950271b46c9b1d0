//! Generic row-collection view-model: filtering, sorting, paging, selection.
//!
//! [`RowCollection`] owns the full row set and derives the visible page from
//! the current search term, category filter, sort spec and page spec. The
//! derived page is recomputed eagerly by every setter, so queries never see
//! stale output. Selection is keyed by row id and survives any view change.

mod options;
mod selection;

pub use options::{
    CategoryFilter, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZES, PageMove, SortDirection, SortSpec,
    TableConfig,
};
pub use selection::SelectionSet;

use std::collections::HashMap;
use std::fmt::Debug;
use std::ops::Range;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::TableError;

/// Trait for rows managed by a [`RowCollection`].
pub trait TableRow {
    /// Category used by the category filter (article status).
    type Category: Copy + PartialEq + Debug;
    /// Numeric sort columns. Parsing rejects unknown or non-numeric names.
    type SortField: Copy + PartialEq + Debug + FromStr<Err = TableError>;

    /// Stable identity, unique within a collection.
    fn id(&self) -> u64;

    fn category(&self) -> Self::Category;

    /// `needle` is trimmed, lowercased and never empty.
    fn matches_search(&self, needle: &str) -> bool;

    /// Numeric sort key for the field.
    fn sort_key(&self, field: Self::SortField) -> u64;
}

/// Output of the last recomputation, as indices into the row vector.
#[derive(Debug, Clone, Default)]
struct DerivedPage {
    /// Matching rows in display order.
    filtered: Vec<usize>,
    /// Slice of `filtered` shown on the current page.
    visible: Range<usize>,
    total: usize,
    page_count: usize,
    current_page: usize,
}

/// Borrowed view of the current page.
#[derive(Debug)]
pub struct PageView<'a, T> {
    pub rows: Vec<&'a T>,
    pub total: usize,
    pub page_count: usize,
    pub current_page: usize,
}

/// Owned, serializable query result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSnapshot<T> {
    pub visible_rows: Vec<T>,
    pub total: usize,
    pub page_count: usize,
    pub current_page: usize,
    pub selected_ids: Vec<u64>,
}

/// View-model over an immutable row collection.
#[derive(Debug)]
pub struct RowCollection<T: TableRow> {
    rows: Vec<T>,
    index: HashMap<u64, usize>,
    config: TableConfig,
    search: String,
    category: CategoryFilter<T::Category>,
    sort: SortSpec<T::SortField>,
    page_size: usize,
    /// Page the user asked for; the displayed page is this value clamped.
    requested_page: usize,
    selection: SelectionSet,
    loading: bool,
    derived: DerivedPage,
}

fn build_index<T: TableRow>(rows: &[T]) -> Result<HashMap<u64, usize>, TableError> {
    let mut index = HashMap::with_capacity(rows.len());
    for (pos, row) in rows.iter().enumerate() {
        if index.insert(row.id(), pos).is_some() {
            return Err(TableError::DuplicateRowId(row.id()));
        }
    }
    Ok(index)
}

impl<T: TableRow> RowCollection<T> {
    /// Creates a view-model. Rejects duplicate ids and invalid configs.
    pub fn new(rows: Vec<T>, config: TableConfig) -> Result<Self, TableError> {
        config.validate()?;
        let index = build_index(&rows)?;
        let page_size = config.default_page_size;
        let mut table = Self {
            rows,
            index,
            config,
            search: String::new(),
            category: CategoryFilter::All,
            sort: SortSpec::default(),
            page_size,
            requested_page: 1,
            selection: SelectionSet::new(),
            loading: false,
            derived: DerivedPage::default(),
        };
        table.recompute();
        Ok(table)
    }

    /// Replaces the whole collection (reload). Filter, sort and page specs are
    /// kept; selected ids that no longer exist are dropped.
    pub fn replace_rows(&mut self, rows: Vec<T>) -> Result<(), TableError> {
        let index = build_index(&rows)?;
        self.rows = rows;
        self.index = index;
        let before = self.selection.len();
        let index = &self.index;
        self.selection.retain(|id| index.contains_key(&id));
        if self.selection.len() != before {
            debug!(
                dropped = before - self.selection.len(),
                "pruned selection after reload"
            );
        }
        self.recompute();
        Ok(())
    }

    /// Re-derives the visible page from the current state.
    pub fn recompute(&mut self) {
        let needle = self.search.trim().to_lowercase();

        let mut filtered: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| self.category.matches(&row.category()))
            .filter(|(_, row)| needle.is_empty() || row.matches_search(&needle))
            .map(|(pos, _)| pos)
            .collect();

        if let Some(field) = self.sort.field {
            let rows = &self.rows;
            let direction = self.sort.direction;
            // `sort_by` is stable; ties keep collection order in both directions.
            filtered.sort_by(|&a, &b| {
                direction.apply(rows[a].sort_key(field).cmp(&rows[b].sort_key(field)))
            });
        }

        let total = filtered.len();
        let page_count = total.div_ceil(self.page_size).max(1);
        let current_page = self.requested_page.clamp(1, page_count);
        let start = (current_page - 1) * self.page_size;
        let end = (start + self.page_size).min(total);

        debug!(
            total,
            page_count, current_page, page_size = self.page_size, "recomputed page"
        );

        self.derived = DerivedPage {
            filtered,
            visible: start..end,
            total,
            page_count,
            current_page,
        };
    }

    // ------------------------------------------------------------------
    // Filter / sort / page setters
    // ------------------------------------------------------------------

    /// Replaces the search term and returns to the first page.
    pub fn set_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term == self.search {
            return;
        }
        self.search = term;
        self.requested_page = 1;
        self.recompute();
    }

    /// Replaces the category filter and returns to the first page.
    pub fn set_category(&mut self, filter: CategoryFilter<T::Category>) {
        if filter == self.category {
            return;
        }
        self.category = filter;
        self.requested_page = 1;
        self.recompute();
    }

    /// Same field toggles the direction; a new field starts descending.
    /// `None` is a no-op.
    pub fn set_sort(&mut self, field: Option<T::SortField>) {
        let Some(field) = field else { return };
        if self.sort.field == Some(field) {
            self.sort.direction = self.sort.direction.toggled();
        } else {
            self.sort = SortSpec {
                field: Some(field),
                direction: SortDirection::Descending,
            };
        }
        self.recompute();
    }

    /// Parses `name` and applies [`set_sort`](Self::set_sort).
    pub fn set_sort_by_name(&mut self, name: &str) -> Result<(), TableError> {
        let field = name.parse::<T::SortField>().inspect_err(|e| {
            warn!(error = %e, "rejected sort field");
        })?;
        self.set_sort(Some(field));
        Ok(())
    }

    /// Changes the page size and returns to the first page.
    pub fn set_page_size(&mut self, size: usize) -> Result<(), TableError> {
        if !self.config.page_sizes.contains(&size) {
            warn!(size, "rejected page size");
            return Err(TableError::UnsupportedPageSize {
                requested: size,
                allowed: self.config.page_sizes.clone(),
            });
        }
        self.page_size = size;
        self.requested_page = 1;
        self.recompute();
        Ok(())
    }

    /// Switches to the next allowed page size, wrapping around.
    pub fn cycle_page_size(&mut self) {
        let sizes = &self.config.page_sizes;
        let pos = sizes.iter().position(|&s| s == self.page_size).unwrap_or(0);
        self.page_size = sizes[(pos + 1) % sizes.len()];
        self.requested_page = 1;
        self.recompute();
    }

    /// Moves one page relative to the displayed page. No-op at the bounds.
    pub fn set_page(&mut self, direction: PageMove) {
        let current = self.derived.current_page;
        let target = match direction {
            PageMove::Previous => current.saturating_sub(1).max(1),
            PageMove::Next => (current + 1).min(self.derived.page_count),
        };
        if target == current {
            return;
        }
        self.requested_page = target;
        self.recompute();
    }

    /// Requests a page by number; the displayed page is clamped.
    pub fn jump_to_page(&mut self, page: usize) {
        self.requested_page = page.max(1);
        self.recompute();
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Flips selection of a row. Returns the new membership.
    pub fn toggle_row_selected(&mut self, id: u64) -> Result<bool, TableError> {
        if !self.index.contains_key(&id) {
            return Err(TableError::UnknownRow(id));
        }
        Ok(self.selection.toggle(id))
    }

    /// Deselects the visible rows when all of them are selected; otherwise
    /// selects all of them. Rows outside the page are never touched.
    pub fn toggle_select_all_visible(&mut self) {
        let visible = self.visible_ids();
        if visible.is_empty() {
            return;
        }
        if self.selection.contains_all(&visible) {
            for id in visible {
                self.selection.remove(id);
            }
        } else {
            self.selection.extend(visible);
        }
    }

    /// Removes one id from the selection. Returns whether it was selected.
    pub fn deselect(&mut self, id: u64) -> bool {
        self.selection.remove(id)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selection.contains(id)
    }

    /// True when the page is non-empty and every visible row is selected.
    pub fn all_visible_selected(&self) -> bool {
        self.selection.contains_all(&self.visible_ids())
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Selected ids in ascending order.
    pub fn selected_ids(&self) -> Vec<u64> {
        self.selection.iter().collect()
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Rows on the current page, in display order.
    pub fn visible_rows(&self) -> impl Iterator<Item = &T> + '_ {
        self.derived.filtered[self.derived.visible.clone()]
            .iter()
            .map(|&pos| &self.rows[pos])
    }

    pub fn visible_ids(&self) -> Vec<u64> {
        self.visible_rows().map(|row| row.id()).collect()
    }

    /// All rows matching the filter and search, in display order.
    pub fn filtered_rows(&self) -> impl Iterator<Item = &T> + '_ {
        self.derived.filtered.iter().map(|&pos| &self.rows[pos])
    }

    pub fn page(&self) -> PageView<'_, T> {
        PageView {
            rows: self.visible_rows().collect(),
            total: self.derived.total,
            page_count: self.derived.page_count,
            current_page: self.derived.current_page,
        }
    }

    pub fn snapshot(&self) -> PageSnapshot<T>
    where
        T: Clone,
    {
        PageSnapshot {
            visible_rows: self.visible_rows().cloned().collect(),
            total: self.derived.total,
            page_count: self.derived.page_count,
            current_page: self.derived.current_page,
            selected_ids: self.selected_ids(),
        }
    }

    pub fn row(&self, id: u64) -> Option<&T> {
        self.index.get(&id).map(|&pos| &self.rows[pos])
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn total(&self) -> usize {
        self.derived.total
    }

    pub fn page_count(&self) -> usize {
        self.derived.page_count
    }

    pub fn current_page(&self) -> usize {
        self.derived.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_sizes(&self) -> &[usize] {
        &self.config.page_sizes
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> CategoryFilter<T::Category> {
        self.category
    }

    pub fn sort(&self) -> SortSpec<T::SortField> {
        self.sort
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ArticleRow, ArticleStatus, ArticleTable, SortField, seed_rows};

    fn table() -> ArticleTable {
        ArticleTable::new(seed_rows(), TableConfig::default()).unwrap()
    }

    fn ids(table: &ArticleTable) -> Vec<u64> {
        table.visible_ids()
    }

    fn article(id: u64, traffic: u64, words: u64, status: ArticleStatus) -> ArticleRow {
        ArticleRow {
            id,
            title: format!("Article {}", id),
            keyword: format!("kw{}", id),
            traffic,
            words,
            created_on: "---".to_string(),
            status,
        }
    }

    #[test]
    fn unsorted_view_keeps_insertion_order() {
        let t = table();
        assert_eq!(ids(&t), vec![1, 2, 3, 4, 5]);
        assert_eq!(t.total(), 5);
        assert_eq!(t.page_count(), 1);
        assert_eq!(t.current_page(), 1);
        assert_eq!(t.page_size(), 10);
    }

    #[test]
    fn generated_filter_returns_three_rows_in_order() {
        let mut t = table();
        t.set_category(CategoryFilter::Only(ArticleStatus::Generated));
        let page = t.page();
        assert_eq!(page.total, 3);
        assert_eq!(page.page_count, 1);
        assert_eq!(
            page.rows.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn status_filter_only_shows_matching_status() {
        let mut t = table();
        for &status in ArticleStatus::all() {
            t.set_category(CategoryFilter::Only(status));
            assert!(t.filtered_rows().all(|r| r.status == status));
        }
        t.set_category(CategoryFilter::Only(ArticleStatus::Archived));
        assert_eq!(t.total(), 0);
        assert_eq!(t.page_count(), 1);
        assert_eq!(t.visible_rows().count(), 0);
    }

    #[test]
    fn words_descending_on_generated_rows() {
        let mut t = table();
        t.set_category(CategoryFilter::Only(ArticleStatus::Generated));
        t.set_sort(Some(SortField::Words));
        assert_eq!(t.sort().direction, SortDirection::Descending);
        let words: Vec<u64> = t.visible_rows().map(|r| r.words).collect();
        assert_eq!(words, vec![4575, 3480, 2676]);
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_keyword() {
        let mut t = table();
        t.set_search("  LEAGUE ");
        assert_eq!(ids(&t), vec![1, 2, 3]);
        t.set_search("executive");
        assert_eq!(ids(&t), vec![4]);
        t.set_search("graphic design services");
        assert_eq!(ids(&t), vec![5]);
        t.set_search("no such article");
        assert!(ids(&t).is_empty());
        t.set_search("");
        assert_eq!(t.total(), 5);
    }

    #[test]
    fn excluded_rows_never_match_search() {
        let mut t = table();
        t.set_search("legends");
        for row in t.rows() {
            let matches = row.title.to_lowercase().contains("legends")
                || row.keyword.to_lowercase().contains("legends");
            assert_eq!(t.filtered_rows().any(|r| r.id == row.id), matches);
        }
    }

    #[test]
    fn sort_toggle_alternates_between_two_states() {
        let mut t = table();
        t.set_sort(Some(SortField::Traffic));
        assert_eq!(t.sort().direction, SortDirection::Descending);
        t.set_sort(Some(SortField::Traffic));
        assert_eq!(t.sort().direction, SortDirection::Ascending);
        t.set_sort(Some(SortField::Traffic));
        assert_eq!(t.sort().direction, SortDirection::Descending);

        t.set_sort(Some(SortField::Words));
        assert_eq!(t.sort().field, Some(SortField::Words));
        assert_eq!(t.sort().direction, SortDirection::Descending);

        t.set_sort(None);
        assert_eq!(t.sort().field, Some(SortField::Words));
    }

    #[test]
    fn sort_is_stable_in_both_directions() {
        let rows = vec![
            article(10, 500, 1, ArticleStatus::Generated),
            article(11, 100, 2, ArticleStatus::Generated),
            article(12, 500, 3, ArticleStatus::Generated),
            article(13, 100, 4, ArticleStatus::Generated),
            article(14, 500, 5, ArticleStatus::Generated),
        ];
        let mut t = ArticleTable::new(rows, TableConfig::default()).unwrap();

        t.set_sort(Some(SortField::Traffic));
        assert_eq!(ids(&t), vec![10, 12, 14, 11, 13]);

        t.set_sort(Some(SortField::Traffic));
        assert_eq!(ids(&t), vec![11, 13, 10, 12, 14]);
    }

    #[test]
    fn seed_traffic_ties_keep_order() {
        let mut t = table();
        t.set_sort(Some(SortField::Traffic));
        t.set_sort(Some(SortField::Traffic));
        assert_eq!(ids(&t), vec![5, 4, 1, 2, 3]);
    }

    #[test]
    fn rejected_sort_name_leaves_state_unchanged() {
        let mut t = table();
        t.set_sort(Some(SortField::Words));
        let before = t.sort();
        let err = t.set_sort_by_name("title").unwrap_err();
        assert_eq!(err, TableError::UnsupportedSortField("title".to_string()));
        assert_eq!(t.sort(), before);

        t.set_sort_by_name("traffic").unwrap();
        assert_eq!(t.sort().field, Some(SortField::Traffic));
    }

    #[test]
    fn clamps_requested_page_to_last_page() {
        let config = TableConfig::new(vec![1, 10, 25, 50], 10).unwrap();
        let mut t = ArticleTable::new(seed_rows(), config).unwrap();
        t.set_category(CategoryFilter::Only(ArticleStatus::Generated));
        t.set_page_size(1).unwrap();
        t.jump_to_page(5);
        assert_eq!(t.total(), 3);
        assert_eq!(t.page_count(), 3);
        assert_eq!(t.current_page(), 3);
        assert_eq!(ids(&t), vec![3]);
    }

    #[test]
    fn page_count_bound_holds_for_all_sizes() {
        for n in 0..=23u64 {
            let rows: Vec<ArticleRow> = (1..=n)
                .map(|id| article(id, id, id, ArticleStatus::Generated))
                .collect();
            let config = TableConfig::new(vec![1, 3, 10], 3).unwrap();
            let mut t = ArticleTable::new(rows, config).unwrap();
            for &size in &[1usize, 3, 10] {
                t.set_page_size(size).unwrap();
                let expected = (n as usize).div_ceil(size).max(1);
                assert_eq!(t.page_count(), expected);
                for page in [0usize, 1, 2, 7, 100] {
                    t.jump_to_page(page);
                    assert!((1..=t.page_count()).contains(&t.current_page()));
                    assert!(t.visible_rows().count() <= size);
                }
            }
        }
    }

    #[test]
    fn page_navigation_is_clamped_at_bounds() {
        let rows: Vec<ArticleRow> = (1..=25)
            .map(|id| article(id, id, id, ArticleStatus::Generated))
            .collect();
        let mut t = ArticleTable::new(rows, TableConfig::default()).unwrap();
        assert_eq!(t.page_count(), 3);

        t.set_page(PageMove::Previous);
        assert_eq!(t.current_page(), 1);

        t.set_page(PageMove::Next);
        t.set_page(PageMove::Next);
        t.set_page(PageMove::Next);
        assert_eq!(t.current_page(), 3);
        assert_eq!(ids(&t), (21..=25).collect::<Vec<_>>());

        t.set_page(PageMove::Previous);
        assert_eq!(t.current_page(), 2);
        assert_eq!(ids(&t).first(), Some(&11));
    }

    #[test]
    fn page_size_change_resets_page_and_rejects_unknown_sizes() {
        let rows: Vec<ArticleRow> = (1..=30)
            .map(|id| article(id, id, id, ArticleStatus::Generated))
            .collect();
        let mut t = ArticleTable::new(rows, TableConfig::default()).unwrap();
        t.set_page(PageMove::Next);
        assert_eq!(t.current_page(), 2);

        let err = t.set_page_size(7).unwrap_err();
        assert_eq!(
            err,
            TableError::UnsupportedPageSize {
                requested: 7,
                allowed: vec![10, 25, 50],
            }
        );
        assert_eq!(t.page_size(), 10);
        assert_eq!(t.current_page(), 2);

        t.set_page_size(25).unwrap();
        assert_eq!(t.current_page(), 1);
        assert_eq!(t.page_count(), 2);

        t.cycle_page_size();
        assert_eq!(t.page_size(), 50);
        t.cycle_page_size();
        assert_eq!(t.page_size(), 10);
    }

    #[test]
    fn filter_changes_return_to_first_page() {
        let rows: Vec<ArticleRow> = (1..=25)
            .map(|id| article(id, id, id, ArticleStatus::Generated))
            .collect();
        let mut t = ArticleTable::new(rows, TableConfig::default()).unwrap();
        t.set_page(PageMove::Next);
        t.set_search("article");
        assert_eq!(t.current_page(), 1);

        t.set_page(PageMove::Next);
        t.set_category(CategoryFilter::Only(ArticleStatus::Generated));
        assert_eq!(t.current_page(), 1);
    }

    #[test]
    fn selection_persists_across_search() {
        let mut t = table();
        assert!(t.toggle_row_selected(4).unwrap());
        t.set_search("league");
        assert!(!ids(&t).contains(&4));
        assert!(t.is_selected(4));
        t.set_search("");
        assert!(ids(&t).contains(&4));
        assert!(t.is_selected(4));
    }

    #[test]
    fn select_all_completes_partial_selection() {
        let mut t = table();
        for id in [1, 3, 5] {
            t.toggle_row_selected(id).unwrap();
        }
        assert!(!t.all_visible_selected());
        t.toggle_select_all_visible();
        assert_eq!(t.selected_ids(), vec![1, 2, 3, 4, 5]);
        assert!(t.all_visible_selected());
    }

    #[test]
    fn select_all_toggle_only_touches_visible_rows() {
        let mut t = table();
        t.toggle_row_selected(4).unwrap();
        t.set_category(CategoryFilter::Only(ArticleStatus::Generated));

        t.toggle_select_all_visible();
        assert_eq!(t.selected_ids(), vec![1, 2, 3, 4]);

        t.toggle_select_all_visible();
        assert_eq!(t.selected_ids(), vec![4]);
    }

    #[test]
    fn select_all_on_empty_page_is_noop() {
        let mut t = table();
        t.set_category(CategoryFilter::Only(ArticleStatus::Archived));
        t.toggle_select_all_visible();
        assert_eq!(t.selected_count(), 0);
        assert!(!t.all_visible_selected());
    }

    #[test]
    fn toggling_unknown_row_is_rejected() {
        let mut t = table();
        assert_eq!(t.toggle_row_selected(99), Err(TableError::UnknownRow(99)));
        assert_eq!(t.selected_count(), 0);
    }

    #[test]
    fn clear_and_deselect() {
        let mut t = table();
        t.toggle_select_all_visible();
        assert!(t.deselect(2));
        assert!(!t.deselect(2));
        assert_eq!(t.selected_count(), 4);
        t.clear_selection();
        assert_eq!(t.selected_count(), 0);
    }

    #[test]
    fn empty_collection_has_one_empty_page() {
        let mut t = ArticleTable::new(Vec::new(), TableConfig::default()).unwrap();
        assert_eq!(t.page_count(), 1);
        assert_eq!(t.current_page(), 1);
        assert_eq!(t.total(), 0);
        t.set_page(PageMove::Next);
        assert_eq!(t.current_page(), 1);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut rows = seed_rows();
        rows.push(article(3, 1, 1, ArticleStatus::Archived));
        let err = ArticleTable::new(rows, TableConfig::default()).unwrap_err();
        assert_eq!(err, TableError::DuplicateRowId(3));
    }

    #[test]
    fn replace_rows_prunes_missing_selection() {
        let mut t = table();
        t.toggle_row_selected(2).unwrap();
        t.toggle_row_selected(5).unwrap();
        t.set_search("league");

        let rows: Vec<ArticleRow> = seed_rows().into_iter().filter(|r| r.id != 5).collect();
        t.replace_rows(rows).unwrap();
        assert_eq!(t.selected_ids(), vec![2]);
        assert_eq!(t.search(), "league");
        assert_eq!(ids(&t), vec![1, 2, 3]);
    }

    #[test]
    fn snapshot_reports_page_and_selection() {
        let mut t = table();
        t.set_category(CategoryFilter::Only(ArticleStatus::Published));
        t.toggle_row_selected(1).unwrap();
        let snap = t.snapshot();
        assert_eq!(snap.total, 1);
        assert_eq!(snap.visible_rows[0].id, 4);
        assert_eq!(snap.selected_ids, vec![1]);

        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["page_count"], 1);
        assert_eq!(json["visible_rows"][0]["keyword"], "virtual executive assistant");
    }

    #[test]
    fn loading_flag_is_host_controlled() {
        let mut t = table();
        assert!(!t.is_loading());
        t.set_loading(true);
        assert!(t.is_loading());
        assert_eq!(t.total(), 5);
    }
}
