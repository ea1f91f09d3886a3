//! Error types for script setup and the mint sequence

use std::path::PathBuf;

use alloy::{
    primitives::TxHash,
    providers::PendingTransactionError,
    transports::TransportError,
};
use thiserror::Error;

/// Startup failures. Anything here aborts the script before a transaction is attempted.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} is not set; replace the placeholder with a real address")]
    Placeholder { field: &'static str },

    #[error("{field} `{value}` is not a valid address: {reason}")]
    InvalidAddress {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("recipient must not be the zero address")]
    ZeroRecipient,

    #[error("invalid rpc url `{value}`: {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("failed to read artifact {path}: {source}")]
    ArtifactRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse artifact {path}: {source}")]
    ArtifactParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("artifact {path} describes `{found}`, expected `{expected}`")]
    ArtifactMismatch {
        path: PathBuf,
        expected: String,
        found: String,
    },
}

/// Failures inside the protected mint sequence.
#[derive(Debug, Error)]
pub enum MintError {
    #[error("no account available on the connected network")]
    NoAccountAvailable,

    #[error("contract has no method `{0}`")]
    UnknownMethod(String),

    #[error("method `{method}` takes {expected} argument(s), got {got}")]
    ArgumentCount {
        method: String,
        expected: usize,
        got: usize,
    },

    #[error("failed to encode call: {0}")]
    Encode(#[from] alloy::dyn_abi::Error),

    #[error("transaction adapter rejected request: {0}")]
    Adapter(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Pending(#[from] PendingTransactionError),

    #[error("transaction {transaction_hash} reverted")]
    Reverted { transaction_hash: TxHash },
}
