//! Command line and environment configuration for the mint script

use std::{fmt, path::PathBuf, str::FromStr};

use alloy::{primitives::Address, signers::local::PrivateKeySigner};
use clap::Parser;
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";
pub const DEFAULT_ARTIFACT: &str = "contracts/FreeNFT.json";
pub const DEFAULT_CONTRACT_NAME: &str = "FreeNFT";

/// Raw script inputs. Every field falls back to an environment variable so a `.env` file works.
#[derive(Clone, Parser)]
#[command(name = "mint", about = "Mint one NFT by calling safeMint on a deployed contract")]
pub struct MintArgs {
    /// JSON-RPC endpoint of the target network
    #[arg(long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Address of the deployed NFT contract
    #[arg(long, env = "CONTRACT_ADDRESS")]
    pub contract_address: Option<String>,

    /// Address that receives the minted token
    #[arg(long, env = "RECIPIENT_ADDRESS")]
    pub recipient: Option<String>,

    /// Compiled contract artifact holding the ABI
    #[arg(long, env = "NFT_ARTIFACT", default_value = DEFAULT_ARTIFACT)]
    pub artifact: PathBuf,

    /// Contract name the artifact must describe
    #[arg(long, env = "NFT_CONTRACT_NAME", default_value = DEFAULT_CONTRACT_NAME)]
    pub contract_name: String,

    /// Sign locally with this key instead of using node-managed accounts
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,
}

/// Connection settings for the network client
#[derive(Clone)]
pub struct NetworkConfig {
    pub rpc_url: Url,
    pub signer: Option<PrivateKeySigner>,
}

impl fmt::Debug for NetworkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkConfig")
            .field("rpc_url", &self.rpc_url.as_str())
            .field("signer", &self.signer.as_ref().map(|s| s.address()))
            .finish()
    }
}

/// Validated script configuration
#[derive(Clone, Debug)]
pub struct MintConfig {
    pub network: NetworkConfig,
    pub contract_address: Address,
    pub recipient: Address,
    pub artifact_path: PathBuf,
    pub contract_name: String,
}

impl MintArgs {
    /// Validate the raw inputs. Performs no network I/O.
    pub fn into_config(self) -> Result<MintConfig, ConfigError> {
        let contract_address = parse_address("contract address", self.contract_address.as_deref())?;
        let recipient = parse_address("recipient address", self.recipient.as_deref())?;
        if recipient.is_zero() {
            return Err(ConfigError::ZeroRecipient);
        }

        let rpc_url = Url::parse(self.rpc_url.trim()).map_err(|source| ConfigError::InvalidUrl {
            value: self.rpc_url.clone(),
            source,
        })?;

        let signer = self
            .private_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(|key| {
                PrivateKeySigner::from_str(key)
                    .map_err(|e| ConfigError::InvalidPrivateKey(e.to_string()))
            })
            .transpose()?;

        Ok(MintConfig {
            network: NetworkConfig { rpc_url, signer },
            contract_address,
            recipient,
            artifact_path: self.artifact,
            contract_name: self.contract_name,
        })
    }
}

/// Parse an address, rejecting unset values, placeholder text and bad EIP-55 checksums.
pub fn parse_address(field: &'static str, value: Option<&str>) -> Result<Address, ConfigError> {
    let value = value.map(str::trim).unwrap_or_default();
    if value.is_empty() || value.contains("<<") || value.contains(">>") {
        return Err(ConfigError::Placeholder { field });
    }

    let invalid = |reason: String| ConfigError::InvalidAddress {
        field,
        value: value.to_string(),
        reason,
    };

    let digits = value.strip_prefix("0x").unwrap_or(value);
    let mixed_case = digits.chars().any(|c| c.is_ascii_uppercase())
        && digits.chars().any(|c| c.is_ascii_lowercase());

    if mixed_case {
        Address::parse_checksummed(value, None).map_err(|e| invalid(e.to_string()))
    } else {
        Address::from_str(value).map_err(|e| invalid(e.to_string()))
    }
}
