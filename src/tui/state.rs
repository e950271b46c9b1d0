//! Application state management.

use ratatui::widgets::TableState as RatatuiTableState;
use tracing::{debug, warn};

use crate::actions::{ActionPlan, Notice, Prompt, RowAction};
use crate::fmt::plural_suffix;
use crate::model::{ArticleStatus, ArticleTable, StatusFilter};
use crate::router::{self, MenuEntry, Page, PageKind};
use crate::table::CategoryFilter;

/// Status tabs above the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    /// Pseudo-tab showing every status; has no tab label of its own.
    All,
    #[default]
    Generated,
    Published,
    Scheduled,
    Archived,
}

impl Tab {
    /// Tabs rendered in the tab bar.
    pub fn all() -> &'static [Tab] {
        &[Tab::Generated, Tab::Published, Tab::Scheduled, Tab::Archived]
    }

    pub fn status(&self) -> Option<ArticleStatus> {
        match self {
            Tab::All => None,
            Tab::Generated => Some(ArticleStatus::Generated),
            Tab::Published => Some(ArticleStatus::Published),
            Tab::Scheduled => Some(ArticleStatus::Scheduled),
            Tab::Archived => Some(ArticleStatus::Archived),
        }
    }

    /// Returns the display name of the tab.
    pub fn label(&self) -> &'static str {
        match self.status() {
            Some(status) => status.tab_label(),
            None => "All Articles",
        }
    }

    pub fn filter(&self) -> StatusFilter {
        StatusFilter::from_tab_label(self.label())
    }

    /// Returns the next tab. `All` continues with the first status tab.
    pub fn next(&self) -> Tab {
        match self {
            Tab::All | Tab::Archived => Tab::Generated,
            Tab::Generated => Tab::Published,
            Tab::Published => Tab::Scheduled,
            Tab::Scheduled => Tab::Archived,
        }
    }

    /// Returns the previous tab.
    pub fn prev(&self) -> Tab {
        match self {
            Tab::All | Tab::Generated => Tab::Archived,
            Tab::Published => Tab::Generated,
            Tab::Scheduled => Tab::Published,
            Tab::Archived => Tab::Scheduled,
        }
    }
}

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the search box.
    Search,
    /// Moving through the sidebar menu.
    Navigation,
}

/// Active popup state. Only one popup can be open at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PopupState {
    /// No popup is open.
    #[default]
    None,
    /// Help popup with scroll offset.
    Help { scroll: usize },
    /// Quit confirmation dialog.
    QuitConfirm,
    /// Article preview.
    ArticleDetail { id: u64 },
    /// Yes/no question before an action runs.
    Confirm { action: RowAction, prompt: Prompt },
    /// Message with a single dismiss button; `then` completes when dismissed.
    Notice {
        notice: Notice,
        then: Option<RowAction>,
    },
}

impl PopupState {
    /// Returns true if any popup is open (excluding None).
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Whole TUI state.
#[derive(Debug)]
pub struct AppState {
    pub table: ArticleTable,
    pub current_tab: Tab,
    pub page: Page,
    pub input_mode: InputMode,
    /// Search box content while typing; mirrors the table's search term.
    pub search_input: String,
    /// Highlighted row within the visible page.
    pub cursor: usize,
    pub menu: Vec<MenuEntry>,
    pub menu_cursor: usize,
    pub popup: PopupState,
    pub status_message: Option<String>,
    /// Where the rows came from, shown in the header.
    pub source: String,
    pub ratatui_state: RatatuiTableState,
}

impl AppState {
    pub fn new(mut table: ArticleTable, source: String) -> Self {
        let current_tab = Tab::default();
        table.set_category(current_tab.filter());
        let page = router::resolve("/");
        let menu = router::menu_entries();
        let menu_cursor = menu
            .iter()
            .position(|e| e.path == page.path)
            .unwrap_or_default();
        Self {
            table,
            current_tab,
            page,
            input_mode: InputMode::Normal,
            search_input: String::new(),
            cursor: 0,
            menu,
            menu_cursor,
            popup: PopupState::None,
            status_message: None,
            source,
            ratatui_state: RatatuiTableState::default(),
        }
    }

    pub fn is_articles_page(&self) -> bool {
        self.page.kind == PageKind::Articles
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.current_tab = tab;
        self.table.set_category(tab.filter());
        self.cursor = 0;
    }

    /// Opens a page by path.
    pub fn navigate(&mut self, path: &str) {
        self.page = router::resolve(path);
        if let Some(pos) = self.menu.iter().position(|e| e.path == self.page.path) {
            self.menu_cursor = pos;
        }
        debug!(path = %self.page.path, title = self.page.title, "navigated");
    }

    /// Updates the search term from the input box.
    pub fn apply_search_input(&mut self) {
        self.table.set_search(self.search_input.clone());
        self.cursor = 0;
    }

    // ------------------------------------------------------------------
    // Row cursor
    // ------------------------------------------------------------------

    fn visible_len(&self) -> usize {
        self.table.visible_rows().count()
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let max = self.visible_len().saturating_sub(1);
        self.cursor = (self.cursor + 1).min(max);
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.visible_len().saturating_sub(1);
    }

    /// Clamps the cursor to the visible page and syncs ratatui state.
    pub fn resolve_cursor(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.cursor = 0;
            self.ratatui_state.select(None);
        } else {
            self.cursor = self.cursor.min(len - 1);
            self.ratatui_state.select(Some(self.cursor));
        }
    }

    /// Id of the highlighted row.
    pub fn cursor_row_id(&self) -> Option<u64> {
        self.table.visible_rows().nth(self.cursor).map(|row| row.id)
    }

    // ------------------------------------------------------------------
    // Actions and popups
    // ------------------------------------------------------------------

    /// Plans an action and opens the matching popup.
    pub fn begin_action(&mut self, action: RowAction) {
        match action.plan(&self.table) {
            Ok(ActionPlan::NothingToDo(notice)) => {
                self.popup = PopupState::Notice { notice, then: None };
            }
            Ok(ActionPlan::Confirm(prompt)) => {
                self.popup = PopupState::Confirm { action, prompt };
            }
            Err(e) => {
                warn!(error = %e, "action rejected");
                self.status_message = Some(e.to_string());
            }
        }
    }

    /// User confirmed the open prompt: show the completion notice.
    pub fn confirm_popup(&mut self) {
        let PopupState::Confirm { action, .. } = &self.popup else {
            return;
        };
        let action = *action;
        match action.completion_notice(&self.table) {
            Ok(notice) => {
                self.popup = PopupState::Notice {
                    notice,
                    then: Some(action),
                };
            }
            Err(e) => {
                self.popup = PopupState::None;
                self.status_message = Some(e.to_string());
            }
        }
    }

    pub fn cancel_popup(&mut self) {
        if matches!(self.popup, PopupState::Confirm { .. }) {
            self.status_message = Some("Cancelled".to_string());
        }
        self.popup = PopupState::None;
    }

    /// Closes a notice, completing the action it follows.
    pub fn dismiss_notice(&mut self) {
        let PopupState::Notice { then, .. } = std::mem::take(&mut self.popup) else {
            return;
        };
        if let Some(action) = then {
            let affected = action.complete(&mut self.table);
            if affected > 0 {
                self.status_message = Some(format!(
                    "{} article{} removed from selection",
                    affected,
                    plural_suffix(affected)
                ));
            }
        }
    }

    pub fn open_detail(&mut self) {
        if let Some(id) = self.cursor_row_id() {
            self.popup = PopupState::ArticleDetail { id };
        }
    }

    /// Label of the status filter actually applied to the table.
    pub fn filter_label(&self) -> &'static str {
        match self.table.category() {
            CategoryFilter::All => "all",
            CategoryFilter::Only(status) => status.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::NoticeKind;
    use crate::model::seed_rows;
    use crate::table::TableConfig;

    fn state() -> AppState {
        let table = ArticleTable::new(seed_rows(), TableConfig::default()).unwrap();
        AppState::new(table, "test".to_string())
    }

    #[test]
    fn starts_on_generated_tab() {
        let s = state();
        assert_eq!(s.current_tab, Tab::Generated);
        assert_eq!(s.table.total(), 3);
        assert!(s.is_articles_page());
        assert_eq!(s.menu[s.menu_cursor].path, router::ARTICLES_PATH);
    }

    #[test]
    fn tab_cycle_skips_all() {
        let mut tab = Tab::Generated;
        for _ in 0..4 {
            tab = tab.next();
            assert_ne!(tab, Tab::All);
        }
        assert_eq!(tab, Tab::Generated);
        assert_eq!(Tab::All.next(), Tab::Generated);
        assert_eq!(Tab::Generated.prev(), Tab::Archived);
    }

    #[test]
    fn tab_filters_follow_labels() {
        assert_eq!(Tab::All.filter(), CategoryFilter::All);
        assert_eq!(
            Tab::Scheduled.filter(),
            CategoryFilter::Only(ArticleStatus::Scheduled)
        );
    }

    #[test]
    fn cursor_is_clamped_to_page() {
        let mut s = state();
        for _ in 0..10 {
            s.cursor_down();
        }
        assert_eq!(s.cursor, 2);
        s.switch_tab(Tab::Published);
        assert_eq!(s.cursor, 0);
        assert_eq!(s.cursor_row_id(), Some(4));
        s.switch_tab(Tab::Archived);
        s.resolve_cursor();
        assert_eq!(s.cursor_row_id(), None);
    }

    #[test]
    fn bulk_publish_flow_through_popups() {
        let mut s = state();
        s.begin_action(RowAction::bulk_publish());
        let PopupState::Notice { notice, then } = &s.popup else {
            panic!("expected notice");
        };
        assert_eq!(notice.kind, NoticeKind::Warning);
        assert!(then.is_none());
        s.dismiss_notice();
        assert!(!s.popup.is_open());

        s.table.toggle_select_all_visible();
        s.begin_action(RowAction::bulk_publish());
        assert!(matches!(s.popup, PopupState::Confirm { .. }));
        s.confirm_popup();
        assert!(matches!(s.popup, PopupState::Notice { then: Some(_), .. }));
        assert_eq!(s.table.selected_count(), 3);
        s.dismiss_notice();
        assert_eq!(s.table.selected_count(), 0);
        assert_eq!(
            s.status_message.as_deref(),
            Some("3 articles removed from selection")
        );
    }

    #[test]
    fn cancel_keeps_selection() {
        let mut s = state();
        s.table.toggle_row_selected(1).unwrap();
        s.begin_action(RowAction::publish(1));
        s.cancel_popup();
        assert!(!s.popup.is_open());
        assert!(s.table.is_selected(1));
        assert_eq!(s.status_message.as_deref(), Some("Cancelled"));
    }

    #[test]
    fn navigate_to_placeholder_and_back() {
        let mut s = state();
        s.navigate("/integrations");
        assert!(!s.is_articles_page());
        assert_eq!(s.page.title, "Integrations");
        s.navigate("/");
        assert!(s.is_articles_page());
    }
}
