use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex, PoisonError,
};

use alloy::{
    primitives::{Address, TxHash},
    transports::TransportErrorKind,
};
use helpers::{CallRequest, MintError, NetworkClient, TransactionOutcome};

/// How the mock answers a transaction submission
#[derive(Clone, Debug)]
pub enum SendBehaviour {
    /// Mined successfully with this hash
    Succeed(TxHash),
    /// Rejected by the node before mining
    Reject(String),
    /// Mined but reverted
    Revert(TxHash),
}

/// In-memory [NetworkClient] that records every call it receives
#[derive(Debug)]
pub struct MockClient {
    accounts: Vec<Address>,
    send: SendBehaviour,
    account_calls: AtomicUsize,
    sent: Mutex<Vec<CallRequest>>,
}

impl MockClient {
    pub fn new(accounts: Vec<Address>, send: SendBehaviour) -> Self {
        Self {
            accounts,
            send,
            account_calls: AtomicUsize::new(0),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn account_calls(&self) -> usize {
        self.account_calls.load(Ordering::SeqCst)
    }

    /// Every request passed to `send_transaction`, in order
    pub fn sent(&self) -> Vec<CallRequest> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn send_calls(&self) -> usize {
        self.sent().len()
    }
}

impl NetworkClient for MockClient {
    async fn accounts(&self) -> Result<Vec<Address>, MintError> {
        self.account_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.accounts.clone())
    }

    async fn send_transaction(&self, call: CallRequest) -> Result<TransactionOutcome, MintError> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call.clone());

        match &self.send {
            SendBehaviour::Succeed(transaction_hash) => Ok(TransactionOutcome {
                transaction_hash: *transaction_hash,
                block_number: Some(1),
                gas_used: 21_000,
                from: call.from,
                to: call.to,
            }),
            SendBehaviour::Reject(message) => {
                Err(MintError::Transport(TransportErrorKind::custom_str(message)))
            }
            SendBehaviour::Revert(transaction_hash) => Err(MintError::Reverted {
                transaction_hash: *transaction_hash,
            }),
        }
    }
}
