//! Terminal User Interface for the article dashboard.
//!
//! The [`App`] owns an [`AppState`] wrapping the article view-model and
//! drives it from terminal events; widgets only read the state.

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;
mod widgets;

pub use app::App;
pub use state::{AppState, InputMode, PopupState, Tab};
