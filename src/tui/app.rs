//! Main TUI application.

use std::io;
use std::time::{Duration, Instant};

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{info, warn};

use crate::fmt::plural_suffix;
use crate::model::ArticleTable;
use crate::provider::ArticleProvider;
use crate::util::OneShotTimer;

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::AppState;

/// Main TUI application.
pub struct App {
    provider: Box<dyn ArticleProvider>,
    state: AppState,
    /// Simulated loading delay; the table shows skeleton rows until it fires.
    loading: OneShotTimer,
    loading_delay: Duration,
    should_quit: bool,
}

impl App {
    /// Creates a new App over an already loaded table.
    pub fn new(
        provider: Box<dyn ArticleProvider>,
        table: ArticleTable,
        loading_delay: Duration,
    ) -> Self {
        let source = provider.describe();
        let mut app = Self {
            provider,
            state: AppState::new(table, source),
            loading: OneShotTimer::new(Duration::ZERO),
            loading_delay,
            should_quit: false,
        };
        app.start_loading(Instant::now());
        app
    }

    /// Runs the TUI application.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let events = EventHandler::new(tick_rate);

        // Main loop
        loop {
            terminal.draw(|frame| render(frame, &mut self.state))?;

            match events.next() {
                Ok(Event::Tick) => self.on_tick(Instant::now()),
                Ok(Event::Key(key)) => match handle_key(&mut self.state, key) {
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::Reload => self.reload(Instant::now()),
                    KeyAction::None => {}
                },
                Ok(Event::Resize) => {}
                Err(_) => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Marks the table as loading until the delay elapses. A pending timer
    /// is cancelled first so its result is discarded.
    fn start_loading(&mut self, now: Instant) {
        self.loading.cancel();
        if self.loading_delay.is_zero() {
            self.state.table.set_loading(false);
            return;
        }
        self.state.table.set_loading(true);
        self.loading = OneShotTimer::started_at(now, self.loading_delay);
    }

    fn on_tick(&mut self, now: Instant) {
        if self.loading.poll(now) {
            self.state.table.set_loading(false);
            info!(rows = self.state.table.rows().len(), "articles ready");
        }
    }

    /// Loads the rows again from the provider, keeping filters, sort and
    /// the selection of rows that still exist.
    fn reload(&mut self, now: Instant) {
        if !self.provider.is_reloadable() {
            self.state.status_message =
                Some(format!("{} cannot be reloaded", self.provider.describe()));
            return;
        }

        let rows = match self.provider.load() {
            Ok(rows) => rows,
            Err(e) => {
                warn!(error = %e, source = %self.provider.describe(), "reload failed");
                self.state.status_message = Some(format!("Reload failed: {}", e));
                return;
            }
        };
        let count = rows.len();
        match self.state.table.replace_rows(rows) {
            Ok(()) => {
                info!(rows = count, "articles reloaded");
                self.state.status_message =
                    Some(format!("Reloaded {} article{}", count, plural_suffix(count)));
                self.start_loading(now);
            }
            Err(e) => {
                warn!(error = %e, "reloaded rows rejected");
                self.state.status_message = Some(format!("Reload failed: {}", e));
            }
        }
    }
}
