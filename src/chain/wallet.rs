// ABOUTME: Wallet provider boundary — account query (silent) and account request (may prompt).
// ABOUTME: RpcWallet implements it over an alloy provider's eth_accounts / eth_requestAccounts.

use alloy_primitives::Address;
use alloy_provider::{DynProvider, Provider};
use async_trait::async_trait;

use crate::chain::error::ChainError;

/// JSON-RPC "method not found".
pub const METHOD_NOT_FOUND: i64 = -32601;

/// The injected wallet. Both calls return addresses in the wallet's preferred order.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Accounts this origin is already authorized for. Never prompts.
    async fn accounts(&self) -> Result<Vec<String>, ChainError>;

    /// Ask the wallet to authorize an account. May prompt the user.
    async fn request_accounts(&self) -> Result<Vec<String>, ChainError>;
}

/// Wallet reached through a JSON-RPC endpoint.
pub struct RpcWallet {
    provider: DynProvider,
}

impl RpcWallet {
    pub fn new(provider: DynProvider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl WalletProvider for RpcWallet {
    async fn accounts(&self) -> Result<Vec<String>, ChainError> {
        let accounts = self.provider.get_accounts().await?;
        Ok(checksummed(accounts))
    }

    async fn request_accounts(&self) -> Result<Vec<String>, ChainError> {
        let requested: Result<Vec<Address>, ChainError> = self
            .provider
            .raw_request("eth_requestAccounts".into(), ())
            .await
            .map_err(ChainError::from);
        match requested {
            Ok(accounts) => Ok(checksummed(accounts)),
            // Plain nodes (anvil, geth --dev) don't implement EIP-1102; their
            // unlocked accounts are already authorized.
            Err(err) if err.code() == Some(METHOD_NOT_FOUND) => {
                tracing::debug!("eth_requestAccounts unsupported, using eth_accounts");
                self.accounts().await
            }
            Err(err) => Err(err),
        }
    }
}

fn checksummed(accounts: Vec<Address>) -> Vec<String> {
    accounts
        .into_iter()
        .map(|account| account.to_checksum(None))
        .collect()
}
