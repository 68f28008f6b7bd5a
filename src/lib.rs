// ABOUTME: Library root for waveport — re-exports all modules for integration testing.
// ABOUTME: The binary entry point is in main.rs, which uses this crate as a library.

pub mod app;
pub mod chain;
pub mod config;
pub mod logging;
pub mod session;
pub mod tui;
