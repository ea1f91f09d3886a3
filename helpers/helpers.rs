//! Common helper functions for the mint script and its tests

pub mod client;
pub mod config;
pub mod contract;
pub mod error;
pub mod runner;

pub use client::{EvmClient, NetworkClient, PassthroughAdapter, TransactionAdapter, TransactionOutcome};
pub use config::{MintArgs, MintConfig, NetworkConfig};
pub use contract::{CallRequest, ContractArtifact, ContractHandle};
pub use error::{ConfigError, MintError};
pub use runner::{MintOutcome, MintRunner};

use tracing_subscriber::EnvFilter;

/// Everything the script needs before it can mint
pub struct ScriptSetup<A = PassthroughAdapter> {
    pub client: EvmClient<A>,
    pub contract: ContractHandle,
    pub recipient: alloy::primitives::Address,
}

/// Install the fmt subscriber, honouring `RUST_LOG` and defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // a subscriber may already be installed when called from tests
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Load the artifact, bind the contract and build the client. No network I/O happens here.
pub fn setup_script<A: TransactionAdapter>(
    config: &MintConfig,
    adapter: A,
) -> Result<ScriptSetup<A>, ConfigError> {
    let artifact = ContractArtifact::load(&config.artifact_path, &config.contract_name)?;
    tracing::debug!(
        contract_name = %artifact.contract_name,
        path = %config.artifact_path.display(),
        "loaded contract artifact"
    );

    Ok(ScriptSetup {
        client: EvmClient::connect(&config.network, adapter),
        contract: ContractHandle::from_artifact(config.contract_address, artifact),
        recipient: config.recipient,
    })
}
