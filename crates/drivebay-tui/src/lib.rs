//! drivebay-tui - Terminal UI for drivebay
//!
//! Renders the drive list editor from `drivebay-app`'s [`AppState`] with
//! ratatui, converts crossterm key events into app messages, and runs the
//! event loop.
//!
//! [`AppState`]: drivebay_app::AppState

pub mod event;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
