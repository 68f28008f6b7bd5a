// ABOUTME: Configuration loading for waveport.
// ABOUTME: Reads ~/.waveport/config.toml, applies .env and CLI overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Address of the deployed WavePortal contract the build talks to by default.
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0x8715FA33E7bBD54270EFe9b8d5ef8FABb161adbC";

/// Environment variable that overrides `chain.rpc_url`.
pub const RPC_URL_ENV: &str = "WAVEPORT_RPC_URL";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub chain: ChainConfig,
    pub session: SessionConfig,
    pub log: LogConfig,
}

/// Wallet provider and contract binding configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// JSON-RPC endpoint of the wallet. `None` means no wallet is installed.
    pub rpc_url: Option<String>,
    pub contract_address: String,
    pub poll_interval_ms: u64,
    pub request_timeout_ms: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: None,
            contract_address: DEFAULT_CONTRACT_ADDRESS.to_string(),
            poll_interval_ms: 2000,
            request_timeout_ms: 10_000,
        }
    }
}

/// Session manager behaviour.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Drop live notifications for entries already present in the log.
    pub dedupe_live_entries: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dedupe_live_entries: true,
        }
    }
}

/// Log sink configuration. The terminal belongs to the TUI, so logs go to a file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LogConfig {
    /// The file logs are written to, falling back to ~/.waveport/waveport.log.
    pub fn file_path(&self) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| Config::base_dir().join("waveport.log"))
    }
}

/// Command-line overrides applied on top of the file and environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub rpc_url: Option<String>,
    pub contract_address: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load config from ~/.waveport/config.toml, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from an explicit path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Apply environment and CLI overrides. CLI beats env beats file.
    pub fn apply_overrides(&mut self, env_rpc_url: Option<String>, overrides: Overrides) {
        if let Some(url) = env_rpc_url.filter(|s| !s.is_empty()) {
            self.chain.rpc_url = Some(url);
        }
        if let Some(url) = overrides.rpc_url {
            self.chain.rpc_url = Some(url);
        }
        if let Some(address) = overrides.contract_address {
            self.chain.contract_address = address;
        }
        if let Some(level) = overrides.log_level {
            self.log.level = level;
        }
    }

    /// Directory holding waveport's config and log files.
    pub fn base_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".waveport")
    }

    /// Path to the config file.
    pub fn config_path() -> PathBuf {
        Self::base_dir().join("config.toml")
    }
}
