// ABOUTME: Entry point for wave — a terminal front-end for the WavePortal contract.
// ABOUTME: Parses CLI args, loads config, initializes logging, and launches the app.

use std::path::PathBuf;

use clap::Parser;

use waveport::app::App;
use waveport::config::{Config, Overrides, RPC_URL_ENV};
use waveport::logging;

#[derive(Parser, Debug)]
#[command(name = "wave", version, about = "Wave at a WavePortal contract from your terminal")]
struct Cli {
    /// Path to the config file (defaults to ~/.waveport/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON-RPC endpoint of the wallet node.
    #[arg(long)]
    rpc_url: Option<String>,

    /// WavePortal contract address.
    #[arg(long)]
    contract: Option<String>,

    /// Log filter, e.g. `debug` or `waveport=trace`.
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _ = dotenvy::dotenv();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.apply_overrides(
        std::env::var(RPC_URL_ENV).ok(),
        Overrides {
            rpc_url: cli.rpc_url,
            contract_address: cli.contract,
            log_level: cli.log_level,
        },
    );

    logging::init(&config.log)?;

    App::new(config).run().await
}
