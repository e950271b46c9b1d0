//! TUI widgets for seodesk.

mod article_detail;
mod articles;
mod dialog;
mod header;
mod help;
mod placeholder;
mod popup;
mod quit_confirm;
mod sidebar;

pub use article_detail::render_article_detail;
pub use articles::render_articles;
pub use dialog::{render_confirm, render_notice};
pub use header::render_header;
pub use help::render_help;
pub use placeholder::render_placeholder;
pub use quit_confirm::render_quit_confirm;
pub use sidebar::render_sidebar;
