//! The mint sequence: pick a sender, build the call, send it once, report.

use std::fmt;

use alloy::primitives::Address;
use tracing::{error, info, warn};

use crate::{
    client::{NetworkClient, TransactionOutcome},
    contract::ContractHandle,
    error::MintError,
};

/// Result of one mint attempt. Failures are reported, never propagated.
#[derive(Debug)]
pub enum MintOutcome {
    Minted {
        recipient: Address,
        transaction: TransactionOutcome,
    },
    Failed {
        recipient: Address,
        error: MintError,
    },
}

impl MintOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Minted { .. })
    }

    pub fn recipient(&self) -> Address {
        match self {
            Self::Minted { recipient, .. } | Self::Failed { recipient, .. } => *recipient,
        }
    }
}

impl fmt::Display for MintOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minted {
                recipient,
                transaction,
            } => write!(
                f,
                "Transaction completed successfully! Non-Fungible Token minted to {recipient} (transaction hash: {})",
                transaction.transaction_hash
            ),
            Self::Failed { recipient, error } => {
                write!(f, "Transaction failed! Could not mint NFT to {recipient}: {error}")
            }
        }
    }
}

/// Mints a single token to a recipient through a bound contract.
pub struct MintRunner<'a, C> {
    client: &'a C,
    contract: &'a ContractHandle,
}

impl<'a, C: NetworkClient> MintRunner<'a, C> {
    pub fn new(client: &'a C, contract: &'a ContractHandle) -> Self {
        Self { client, contract }
    }

    /// Run the mint once. Submits at most one transaction.
    pub async fn run(&self, recipient: Address) -> MintOutcome {
        info!(contract = %self.contract.address(), "Minting 1 token...");

        match self.mint(recipient).await {
            Ok(transaction) => {
                info!(
                    transaction_hash = %transaction.transaction_hash,
                    block_number = ?transaction.block_number,
                    gas_used = transaction.gas_used,
                    from = %transaction.from,
                    "Transaction submitted!"
                );
                info!(%recipient, "Transaction completed successfully! Non-Fungible Token minted");
                MintOutcome::Minted {
                    recipient,
                    transaction,
                }
            }
            Err(error) => {
                if matches!(error, MintError::NoAccountAvailable) {
                    warn!("network reported no accounts; set PRIVATE_KEY or unlock an account on the node");
                }
                error!(%recipient, %error, "Transaction failed! Could not mint NFT.");
                MintOutcome::Failed { recipient, error }
            }
        }
    }

    async fn mint(&self, recipient: Address) -> Result<TransactionOutcome, MintError> {
        let accounts = self.client.accounts().await?;
        let from = *accounts.first().ok_or(MintError::NoAccountAvailable)?;

        let call = self.contract.safe_mint(from, recipient)?;
        self.client.send_transaction(call).await
    }
}
