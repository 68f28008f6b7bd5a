// ABOUTME: WavePortal contract boundary — reads, the wave() write, and NewWave listeners.
// ABOUTME: RpcWavePortal drives the sol!-generated alloy binding and its NewWave log watcher.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use alloy_contract::EventPoller;
use alloy_network::ReceiptResponse;
use alloy_primitives::{Address, TxHash, U256, hex};
use alloy_provider::{DynProvider, PendingTransactionBuilder, Provider};
use alloy_sol_types::sol;
use async_trait::async_trait;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::chain::error::ChainError;

sol! {
    #[sol(rpc)]
    contract WavePortal {
        struct Wave {
            address waver;
            string message;
            uint256 timestamp;
        }

        event NewWave(address indexed from, string message, uint256 timestamp);

        function getTotalWaves() external view returns (uint256);
        function getAllWaves() external view returns (Wave[] memory);
        function wave(string memory message) external;
    }
}

/// A wave as stored by the contract. `timestamp` is in seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveRecord {
    pub waver: String,
    pub timestamp: u64,
    pub message: String,
}

/// Payload of a `NewWave` event. `timestamp` is in seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveNotification {
    pub from: String,
    pub message: String,
    pub timestamp: u64,
}

/// Handle to a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxHandle {
    pub hash: String,
}

/// Identity of a registered `NewWave` listener, used to deregister it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Handle to the deployed WavePortal contract.
#[async_trait]
pub trait WaveContract: Send + Sync {
    async fn total_waves(&self) -> Result<u64, ChainError>;

    async fn all_waves(&self) -> Result<Vec<WaveRecord>, ChainError>;

    /// Send `wave(message)` from `from`. Returns once the wallet accepted it.
    async fn wave(&self, from: &str, message: &str) -> Result<TxHandle, ChainError>;

    /// Suspend until `tx` is mined. A failed receipt is an error.
    async fn wait_for_confirmation(&self, tx: &TxHandle) -> Result<(), ChainError>;

    /// Deliver every subsequent `NewWave` to `listener` until unsubscribed.
    async fn subscribe(
        &self,
        listener: mpsc::Sender<WaveNotification>,
    ) -> Result<ListenerId, ChainError>;

    fn unsubscribe(&self, id: ListenerId);
}

/// WavePortal reached through an alloy provider.
pub struct RpcWavePortal {
    provider: DynProvider,
    address: Address,
    next_listener: AtomicU64,
    listeners: Mutex<HashMap<ListenerId, JoinHandle<()>>>,
}

impl RpcWavePortal {
    pub fn new(provider: DynProvider, address: &str) -> Result<Self, ChainError> {
        Ok(Self {
            provider,
            address: parse_address(address)?,
            next_listener: AtomicU64::new(1),
            listeners: Mutex::new(HashMap::new()),
        })
    }

    fn listeners(&self) -> std::sync::MutexGuard<'_, HashMap<ListenerId, JoinHandle<()>>> {
        self.listeners.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl WaveContract for RpcWavePortal {
    async fn total_waves(&self) -> Result<u64, ChainError> {
        let portal = WavePortal::new(self.address, self.provider.clone());
        let total = portal.getTotalWaves().call().await?._0;
        to_u64(total)
    }

    async fn all_waves(&self) -> Result<Vec<WaveRecord>, ChainError> {
        let portal = WavePortal::new(self.address, self.provider.clone());
        let waves = portal.getAllWaves().call().await?._0;
        waves.into_iter().map(WaveRecord::try_from).collect()
    }

    async fn wave(&self, from: &str, message: &str) -> Result<TxHandle, ChainError> {
        let from = parse_address(from)?;
        let portal = WavePortal::new(self.address, self.provider.clone());
        let pending = portal
            .wave(message.to_string())
            .from(from)
            .send()
            .await?;
        Ok(TxHandle {
            hash: hex::encode_prefixed(pending.tx_hash()),
        })
    }

    async fn wait_for_confirmation(&self, tx: &TxHandle) -> Result<(), ChainError> {
        let hash: TxHash = tx
            .hash
            .parse()
            .map_err(|e| ChainError::Decode(format!("transaction hash {}: {}", tx.hash, e)))?;
        let receipt = PendingTransactionBuilder::new(self.provider.root().clone(), hash)
            .get_receipt()
            .await?;
        if ReceiptResponse::status(&receipt) {
            Ok(())
        } else {
            Err(ChainError::Reverted {
                hash: tx.hash.clone(),
            })
        }
    }

    async fn subscribe(
        &self,
        listener: mpsc::Sender<WaveNotification>,
    ) -> Result<ListenerId, ChainError> {
        let portal = WavePortal::new(self.address, self.provider.clone());
        let poller = portal.NewWave_filter().watch().await?;
        let id = ListenerId(self.next_listener.fetch_add(1, Ordering::Relaxed));
        let task = tokio::spawn(forward_new_waves(poller, listener));
        self.listeners().insert(id, task);
        tracing::debug!(listener = id.0, "NewWave listener registered");
        Ok(id)
    }

    fn unsubscribe(&self, id: ListenerId) {
        if let Some(task) = self.listeners().remove(&id) {
            task.abort();
            tracing::debug!(listener = id.0, "NewWave listener removed");
        }
    }
}

impl Drop for RpcWavePortal {
    fn drop(&mut self) {
        for (_, task) in self.listeners().drain() {
            task.abort();
        }
    }
}

/// Forward decoded `NewWave` events to `listener` in log order until it closes.
async fn forward_new_waves(
    poller: EventPoller<WavePortal::NewWave>,
    listener: mpsc::Sender<WaveNotification>,
) {
    let mut events = poller.into_stream();
    while let Some(item) = events.next().await {
        let notification = item
            .map_err(ChainError::from)
            .and_then(|(event, _log)| WaveNotification::try_from(event));
        match notification {
            Ok(notification) => {
                if listener.send(notification).await.is_err() {
                    return;
                }
            }
            Err(e) => tracing::warn!(error = %e, "skipping undecodable NewWave log"),
        }
    }
}

impl TryFrom<WavePortal::Wave> for WaveRecord {
    type Error = ChainError;

    fn try_from(wave: WavePortal::Wave) -> Result<Self, Self::Error> {
        Ok(WaveRecord {
            waver: wave.waver.to_checksum(None),
            timestamp: to_u64(wave.timestamp)?,
            message: wave.message,
        })
    }
}

impl TryFrom<WavePortal::NewWave> for WaveNotification {
    type Error = ChainError;

    fn try_from(event: WavePortal::NewWave) -> Result<Self, Self::Error> {
        Ok(WaveNotification {
            from: event.from.to_checksum(None),
            message: event.message,
            timestamp: to_u64(event.timestamp)?,
        })
    }
}

fn parse_address(raw: &str) -> Result<Address, ChainError> {
    raw.parse::<Address>()
        .map_err(|e| ChainError::InvalidAddress(format!("{}: {}", raw, e)))
}

fn to_u64(value: U256) -> Result<u64, ChainError> {
    u64::try_from(value).map_err(|_| ChainError::Decode(format!("{} does not fit in u64", value)))
}
