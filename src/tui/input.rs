//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::actions::RowAction;
use crate::model::SortField;
use crate::table::PageMove;

use super::state::{AppState, InputMode, PopupState, Tab};

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Reload rows from the provider.
    Reload,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }
    if state.popup.is_open() {
        return handle_popup(state, key);
    }
    match state.input_mode {
        InputMode::Normal => handle_normal_mode(state, key),
        InputMode::Search => handle_search_mode(state, key),
        InputMode::Navigation => handle_navigation_mode(state, key),
    }
}

fn handle_popup(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match state.popup {
        PopupState::None => KeyAction::None,
        PopupState::QuitConfirm => match key.code {
            KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') => {
                state.popup = PopupState::None;
                KeyAction::Quit
            }
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                state.popup = PopupState::None;
                KeyAction::None
            }
            _ => KeyAction::None,
        },
        PopupState::Help { scroll } => {
            state.popup = match key.code {
                KeyCode::Up | KeyCode::Char('k') => PopupState::Help {
                    scroll: scroll.saturating_sub(1),
                },
                KeyCode::Down | KeyCode::Char('j') => PopupState::Help {
                    scroll: scroll.saturating_add(1),
                },
                KeyCode::PageUp => PopupState::Help {
                    scroll: scroll.saturating_sub(10),
                },
                KeyCode::PageDown => PopupState::Help {
                    scroll: scroll.saturating_add(10),
                },
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter => {
                    PopupState::None
                }
                _ => PopupState::Help { scroll },
            };
            KeyAction::None
        }
        PopupState::ArticleDetail { .. } => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                state.popup = PopupState::None;
            }
            KeyAction::None
        }
        PopupState::Confirm { .. } => {
            match key.code {
                KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => state.confirm_popup(),
                KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => state.cancel_popup(),
                _ => {}
            }
            KeyAction::None
        }
        PopupState::Notice { .. } => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                state.dismiss_notice();
            }
            KeyAction::None
        }
    }
}

/// Keys that need a loaded table. Returns false (and explains why) while loading.
fn table_ready(state: &mut AppState) -> bool {
    if !state.is_articles_page() {
        return false;
    }
    if state.table.is_loading() {
        state.status_message = Some("Loading articles…".to_string());
        return false;
    }
    true
}

/// Handles keys in normal mode.
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    state.status_message = None;
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::QuitConfirm;
        }
        KeyCode::Char('?') | KeyCode::F(1) => {
            state.popup = PopupState::Help { scroll: 0 };
        }
        KeyCode::Char('n') => {
            state.input_mode = InputMode::Navigation;
        }
        KeyCode::Char('r') => return KeyAction::Reload,

        // Everything below acts on the article table.
        _ if !state.is_articles_page() => {}

        // Tabs
        KeyCode::Tab => state.switch_tab(state.current_tab.next()),
        KeyCode::BackTab => state.switch_tab(state.current_tab.prev()),
        KeyCode::Char('0') => state.switch_tab(Tab::All),
        KeyCode::Char(c @ '1'..='4') => {
            let idx = c as usize - '1' as usize;
            state.switch_tab(Tab::all()[idx]);
        }

        // Search
        KeyCode::Char('/') => {
            state.search_input = state.table.search().to_string();
            state.input_mode = InputMode::Search;
        }

        // Cursor and pages
        KeyCode::Up | KeyCode::Char('k') => state.cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => state.cursor_down(),
        KeyCode::Home => state.cursor = 0,
        KeyCode::End => state.cursor_end(),
        KeyCode::Left | KeyCode::Char('[') | KeyCode::PageUp => {
            state.table.set_page(PageMove::Previous);
            state.cursor = 0;
        }
        KeyCode::Right | KeyCode::Char(']') | KeyCode::PageDown => {
            state.table.set_page(PageMove::Next);
            state.cursor = 0;
        }
        KeyCode::Char('p') => {
            state.table.cycle_page_size();
            state.cursor = 0;
            state.status_message = Some(format!(
                "Showing {} entries per page",
                state.table.page_size()
            ));
        }
        KeyCode::Enter => state.open_detail(),

        // Sorting, selection and actions are disabled while loading.
        KeyCode::Char('t') if table_ready(state) => {
            state.table.set_sort(Some(SortField::Traffic));
        }
        KeyCode::Char('w') if table_ready(state) => {
            state.table.set_sort(Some(SortField::Words));
        }
        KeyCode::Char(' ') if table_ready(state) => {
            if let Some(id) = state.cursor_row_id() {
                let _ = state.table.toggle_row_selected(id);
            }
        }
        KeyCode::Char('a') if table_ready(state) => state.table.toggle_select_all_visible(),
        KeyCode::Char('c') if table_ready(state) => {
            state.table.clear_selection();
            state.status_message = Some("Selection cleared".to_string());
        }
        KeyCode::Char('B') if table_ready(state) => state.begin_action(RowAction::bulk_publish()),
        KeyCode::Char('X') if table_ready(state) => state.begin_action(RowAction::bulk_archive()),
        KeyCode::Char('P') if table_ready(state) => {
            if let Some(id) = state.cursor_row_id() {
                state.begin_action(RowAction::publish(id));
            }
        }
        KeyCode::Char('x') if table_ready(state) => {
            if let Some(id) = state.cursor_row_id() {
                state.begin_action(RowAction::archive(id));
            }
        }
        _ => {}
    }
    KeyAction::None
}

/// Handles keys while typing a search term. The table filters as you type.
fn handle_search_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter => {
            state.input_mode = InputMode::Normal;
        }
        KeyCode::Esc => {
            state.search_input.clear();
            state.apply_search_input();
            state.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            state.search_input.pop();
            state.apply_search_input();
        }
        KeyCode::Char(c) => {
            state.search_input.push(c);
            state.apply_search_input();
        }
        _ => {}
    }
    KeyAction::None
}

/// Handles keys while the sidebar has focus.
fn handle_navigation_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.menu_cursor = state.menu_cursor.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let max = state.menu.len().saturating_sub(1);
            state.menu_cursor = (state.menu_cursor + 1).min(max);
        }
        KeyCode::Enter => {
            if let Some(entry) = state.menu.get(state.menu_cursor).copied() {
                state.navigate(entry.path);
            }
            state.input_mode = InputMode::Normal;
        }
        KeyCode::Esc | KeyCode::Char('n') => {
            state.input_mode = InputMode::Normal;
        }
        KeyCode::Char('q') => {
            state.popup = PopupState::QuitConfirm;
        }
        _ => {}
    }
    KeyAction::None
}
