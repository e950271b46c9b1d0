//! Utility modules for seodesk.

mod timer;

pub use timer::OneShotTimer;
