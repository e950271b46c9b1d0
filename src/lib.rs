//! seodesk - article dashboard view-model and terminal UI.
//!
//! The library is split into:
//! - [`table`] - generic row collection: filter, search, sort, paginate, select
//! - [`model`] - article rows and statuses on top of the table
//! - [`actions`] - simulated publish/archive flows and the dialog seam
//! - [`provider`] - where the rows come from
//! - [`router`] - page routing and the sidebar menu
//! - [`tui`] - interactive terminal dashboard

pub mod actions;
pub mod error;
pub mod fmt;
pub mod model;
pub mod provider;
pub mod router;
pub mod table;
pub mod tui;
pub mod util;
