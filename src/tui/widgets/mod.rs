// ABOUTME: TUI widget sub-modules for the entry log, summary lines, and status bar.
// ABOUTME: Each widget is a pure rendering function returning ratatui Lines.

pub mod entries;
pub mod status;
pub mod summary;
