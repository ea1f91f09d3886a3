//! Network client seam and the alloy-backed implementation

use std::future::Future;

use alloy::{
    network::{EthereumWallet, TransactionBuilder},
    primitives::{Address, TxHash},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
};
use tracing::{debug, info};

use crate::{config::NetworkConfig, contract::CallRequest, error::MintError};

/// What the network reports back for a mined transaction
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionOutcome {
    pub transaction_hash: TxHash,
    pub block_number: Option<u64>,
    pub gas_used: u64,
    pub from: Address,
    pub to: Address,
}

/// Account enumeration and transaction submission against a connected network.
pub trait NetworkClient {
    /// Accounts the client can send from, in the order the network reports them.
    fn accounts(&self) -> impl Future<Output = Result<Vec<Address>, MintError>> + Send;

    /// Submit `call` and wait until it is mined. A reverted receipt is an error.
    fn send_transaction(
        &self,
        call: CallRequest,
    ) -> impl Future<Output = Result<TransactionOutcome, MintError>> + Send;
}

/// Rewrites outgoing transactions for networks with their own transaction encoding
/// (e.g. chains that expect encrypted calldata).
pub trait TransactionAdapter: Send + Sync {
    fn name(&self) -> &str;

    fn adapt(&self, request: TransactionRequest) -> Result<TransactionRequest, MintError>;
}

/// Plain EVM networks need no rewriting.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassthroughAdapter;

impl TransactionAdapter for PassthroughAdapter {
    fn name(&self) -> &str {
        "passthrough"
    }

    fn adapt(&self, request: TransactionRequest) -> Result<TransactionRequest, MintError> {
        Ok(request)
    }
}

/// [NetworkClient] over an alloy HTTP provider.
///
/// Without a local signer the node's own accounts are used (`eth_accounts` /
/// `eth_sendTransaction`), which is how a dev node such as Hardhat or Anvil is driven.
pub struct EvmClient<A = PassthroughAdapter> {
    provider: DynProvider,
    local_account: Option<Address>,
    adapter: A,
}

impl<A: TransactionAdapter> EvmClient<A> {
    /// Build the client. No request is made until the first call.
    pub fn connect(config: &NetworkConfig, adapter: A) -> Self {
        let url = config.rpc_url.clone();
        match &config.signer {
            Some(signer) => {
                let provider = ProviderBuilder::new()
                    .wallet(EthereumWallet::from(signer.clone()))
                    .connect_http(url)
                    .erased();
                Self::new(provider, Some(signer.address()), adapter)
            }
            None => Self::new(ProviderBuilder::new().connect_http(url).erased(), None, adapter),
        }
    }

    pub fn new(provider: DynProvider, local_account: Option<Address>, adapter: A) -> Self {
        Self {
            provider,
            local_account,
            adapter,
        }
    }

    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    /// Turn a contract call into the request handed to the provider.
    pub fn prepare(&self, call: &CallRequest) -> Result<TransactionRequest, MintError> {
        let request = TransactionRequest::default()
            .with_from(call.from)
            .with_to(call.to)
            .with_input(call.input.clone());
        self.adapter.adapt(request)
    }
}

impl<A: TransactionAdapter> NetworkClient for EvmClient<A> {
    async fn accounts(&self) -> Result<Vec<Address>, MintError> {
        if let Some(account) = self.local_account {
            return Ok(vec![account]);
        }
        let accounts = self.provider.get_accounts().await?;
        debug!(count = accounts.len(), "fetched node accounts");
        Ok(accounts)
    }

    async fn send_transaction(&self, call: CallRequest) -> Result<TransactionOutcome, MintError> {
        let request = self.prepare(&call)?;
        debug!(
            adapter = self.adapter.name(),
            method = %call.method,
            to = %call.to,
            "sending transaction"
        );

        let pending = self.provider.send_transaction(request).await?;
        info!(transaction_hash = %pending.tx_hash(), "transaction submitted");

        let receipt = pending.get_receipt().await?;
        if !receipt.status() {
            return Err(MintError::Reverted {
                transaction_hash: receipt.transaction_hash,
            });
        }

        Ok(TransactionOutcome {
            transaction_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
            gas_used: receipt.gas_used,
            from: receipt.from,
            to: receipt.to.unwrap_or(call.to),
        })
    }
}
