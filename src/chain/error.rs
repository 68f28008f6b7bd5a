// ABOUTME: Error type for wallet and contract calls.
// ABOUTME: Knows how to dig a revert reason out of nested JSON-RPC error payloads.

use alloy_primitives::hex;
use alloy_provider::PendingTransactionError;
use alloy_sol_types::{Revert, SolError};
use alloy_transport::TransportError;
use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by the wallet provider or the contract binding.
#[derive(Error, Debug)]
pub enum ChainError {
    /// The node or wallet answered with a JSON-RPC error object.
    #[error("RPC error {code}: {message}")]
    Rpc {
        code: i64,
        message: String,
        data: Option<Value>,
    },

    /// The request never produced a JSON-RPC answer.
    #[error("Transport error: {0}")]
    Transport(String),

    /// A response could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The contract binding rejected the call before it reached the node.
    #[error("Contract error: {0}")]
    Contract(String),

    /// An address string did not parse.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// The transaction was mined with a failure status.
    #[error("Transaction {hash} reverted")]
    Reverted { hash: String },
}

impl From<TransportError> for ChainError {
    fn from(err: TransportError) -> Self {
        match err.as_error_resp() {
            Some(payload) => ChainError::Rpc {
                code: payload.code,
                message: payload.message.to_string(),
                data: payload
                    .data
                    .as_ref()
                    .and_then(|raw| serde_json::from_str(raw.get()).ok()),
            },
            None => ChainError::Transport(err.to_string()),
        }
    }
}

impl From<alloy_sol_types::Error> for ChainError {
    fn from(err: alloy_sol_types::Error) -> Self {
        ChainError::Decode(err.to_string())
    }
}

impl From<alloy_contract::Error> for ChainError {
    fn from(err: alloy_contract::Error) -> Self {
        match err {
            alloy_contract::Error::TransportError(err) => err.into(),
            alloy_contract::Error::AbiError(err) => ChainError::Decode(err.to_string()),
            other => ChainError::Contract(other.to_string()),
        }
    }
}

impl From<PendingTransactionError> for ChainError {
    fn from(err: PendingTransactionError) -> Self {
        match err {
            PendingTransactionError::TransportError(err) => err.into(),
            other => ChainError::Transport(other.to_string()),
        }
    }
}

impl ChainError {
    /// JSON-RPC error code, if this is an RPC error.
    pub fn code(&self) -> Option<i64> {
        match self {
            ChainError::Rpc { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// The message to show the user.
    ///
    /// Wallets wrap contract reverts one level deeper than generic errors:
    /// the outer message is usually "Internal JSON-RPC error." while
    /// `data.message` (or an ABI-encoded `Error(string)` in `data`) carries
    /// the actual reason. Falls back to the outer message.
    pub fn reason(&self) -> String {
        match self {
            ChainError::Rpc { message, data, .. } => data
                .as_ref()
                .and_then(nested_reason)
                .unwrap_or_else(|| message.clone()),
            other => other.to_string(),
        }
    }
}

fn nested_reason(data: &Value) -> Option<String> {
    match data {
        Value::Object(map) => map
            .get("message")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .or_else(|| map.get("data").and_then(nested_reason)),
        Value::String(raw) => decode_revert_data(raw),
        _ => None,
    }
}

/// Decode a hex `Error(string)` revert payload into its reason.
pub fn decode_revert_data(raw: &str) -> Option<String> {
    let bytes = hex::decode(raw).ok()?;
    <Revert as SolError>::abi_decode(&bytes, true)
        .ok()
        .map(|revert| revert.reason)
}
