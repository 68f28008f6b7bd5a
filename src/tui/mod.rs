// ABOUTME: TUI module — ratatui full-screen interface for the wave portal.
// ABOUTME: Counter, message input, entry log, status bar, and the Elm-style update model.

pub mod input;
pub mod model;
pub mod state;
pub mod subscriptions;
pub mod ui;
pub mod widgets;

pub use state::*;
