// ABOUTME: Tracing setup — EnvFilter plus a plain-text fmt layer writing to the log file.
// ABOUTME: The terminal belongs to the TUI, so nothing is ever logged to stdout or stderr.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogConfig;

/// Build the filter: `RUST_LOG` wins when set and valid, else the configured level.
pub fn build_filter(env_directives: Option<&str>, configured_level: &str) -> EnvFilter {
    env_directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .or_else(|| EnvFilter::try_new(configured_level).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Install the global subscriber, appending to the configured log file.
pub fn init(config: &LogConfig) -> anyhow::Result<()> {
    let path = config.file_path();
    let file = open_log_file(&path)?;

    let env_directives = std::env::var("RUST_LOG").ok();
    let filter = build_filter(env_directives.as_deref(), &config.level);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}

fn open_log_file(path: &Path) -> anyhow::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}
