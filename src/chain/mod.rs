// ABOUTME: Chain module — the wallet provider and WavePortal contract boundaries.
// ABOUTME: Both are traits so the session manager can run against fakes in tests.

pub mod contract;
pub mod error;
pub mod wallet;

use std::sync::Arc;
use std::time::Duration;

use alloy_provider::{DynProvider, Provider, ProviderBuilder};
use alloy_rpc_client::RpcClient;
use alloy_transport_http::Http;
use anyhow::Context;

pub use contract::{ListenerId, TxHandle, WaveContract, WaveNotification, WaveRecord};
pub use error::ChainError;
pub use wallet::WalletProvider;

use crate::config::ChainConfig;
use contract::RpcWavePortal;
use wallet::RpcWallet;

/// An injected wallet capability paired with a contract handle bound through it.
#[derive(Clone)]
pub struct Binding {
    pub wallet: Arc<dyn WalletProvider>,
    pub contract: Arc<dyn WaveContract>,
}

/// Build the JSON-RPC binding from config. Returns `None` when no wallet is configured.
pub fn create_binding(config: &ChainConfig) -> anyhow::Result<Option<Binding>> {
    let Some(url) = config.rpc_url.as_deref().filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    let provider = connect(url, config)?;
    let contract = RpcWavePortal::new(provider.clone(), &config.contract_address)?;

    Ok(Some(Binding {
        wallet: Arc::new(RpcWallet::new(provider)),
        contract: Arc::new(contract),
    }))
}

/// HTTP provider with the configured request timeout. The poll interval drives
/// both the receipt watcher and the `NewWave` log watcher.
fn connect(url: &str, config: &ChainConfig) -> anyhow::Result<DynProvider> {
    let url: reqwest::Url = url
        .parse()
        .with_context(|| format!("invalid RPC URL: {}", url))?;
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_millis(config.request_timeout_ms))
        .build()
        .context("failed to build HTTP client")?;
    let transport = Http::with_client(http_client, url);
    let is_local = transport.guess_local();
    let client = RpcClient::new(transport, is_local)
        .with_poll_interval(Duration::from_millis(config.poll_interval_ms));

    let provider = ProviderBuilder::new().on_client(client);
    tracing::debug!(
        poll_interval_ms = config.poll_interval_ms,
        is_local,
        "RPC provider ready"
    );
    Ok(provider.erased())
}
