//! Contract artifacts and address-bound contract handles

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt},
    json_abi::JsonAbi,
    primitives::{Address, Bytes},
};
use serde::Deserialize;

use crate::error::{ConfigError, MintError};

pub const SAFE_MINT: &str = "safeMint";

/// Interface description of a compiled contract
#[derive(Clone, Debug)]
pub struct ContractArtifact {
    pub contract_name: String,
    pub abi: JsonAbi,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ArtifactFile {
    Hardhat {
        #[serde(rename = "contractName")]
        contract_name: String,
        abi: JsonAbi,
    },
    Abi(JsonAbi),
}

impl ContractArtifact {
    /// Read a Hardhat artifact or a bare ABI array from disk.
    pub fn load(path: impl AsRef<Path>, expected_name: &str) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::ArtifactRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json, path, expected_name)
    }

    pub fn from_json(json: &str, path: &Path, expected_name: &str) -> Result<Self, ConfigError> {
        let file: ArtifactFile =
            serde_json::from_str(json).map_err(|source| ConfigError::ArtifactParse {
                path: path.to_path_buf(),
                source,
            })?;

        match file {
            ArtifactFile::Hardhat { contract_name, abi } => {
                if contract_name != expected_name {
                    return Err(ConfigError::ArtifactMismatch {
                        path: PathBuf::from(path),
                        expected: expected_name.to_string(),
                        found: contract_name,
                    });
                }
                Ok(Self { contract_name, abi })
            }
            // bare ABI carries no name, trust the caller
            ArtifactFile::Abi(abi) => Ok(Self {
                contract_name: expected_name.to_string(),
                abi,
            }),
        }
    }
}

/// A single contract call ready to be submitted
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallRequest {
    pub from: Address,
    pub to: Address,
    pub method: String,
    pub input: Bytes,
}

/// A contract address bound to its ABI.
///
/// Binding is purely local: the address is not checked and no code lookup is made.
#[derive(Clone, Debug)]
pub struct ContractHandle {
    address: Address,
    abi: Arc<JsonAbi>,
}

impl ContractHandle {
    pub fn new(address: Address, abi: JsonAbi) -> Self {
        Self {
            address,
            abi: Arc::new(abi),
        }
    }

    pub fn from_artifact(address: Address, artifact: ContractArtifact) -> Self {
        Self::new(address, artifact.abi)
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Encode calldata for `method`, picking the overload that takes `args.len()` inputs.
    pub fn encode_call(&self, method: &str, args: &[DynSolValue]) -> Result<Bytes, MintError> {
        let overloads = self
            .abi
            .function(method)
            .filter(|overloads| !overloads.is_empty())
            .ok_or_else(|| MintError::UnknownMethod(method.to_string()))?;

        let function = overloads
            .iter()
            .find(|f| f.inputs.len() == args.len())
            .ok_or_else(|| MintError::ArgumentCount {
                method: method.to_string(),
                expected: overloads[0].inputs.len(),
                got: args.len(),
            })?;

        Ok(function.abi_encode_input(args)?.into())
    }

    pub fn call(
        &self,
        from: Address,
        method: &str,
        args: &[DynSolValue],
    ) -> Result<CallRequest, MintError> {
        Ok(CallRequest {
            from,
            to: self.address,
            method: method.to_string(),
            input: self.encode_call(method, args)?,
        })
    }

    /// Build the `safeMint(to)` call sent from `from`.
    pub fn safe_mint(&self, from: Address, recipient: Address) -> Result<CallRequest, MintError> {
        self.call(from, SAFE_MINT, &[DynSolValue::Address(recipient)])
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, keccak256, U256};

    use super::*;

    const ARTIFACT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../contracts/FreeNFT.json");
    const CONTRACT: Address = address!("0x5FbDB2315678afecb367f032d93F642f64180aa3");
    const SENDER: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
    const RECIPIENT: Address = address!("0x70997970C51812dc3A010C7d01b50e0d17dc79C8");

    fn handle() -> ContractHandle {
        let artifact = ContractArtifact::load(ARTIFACT, "FreeNFT").unwrap();
        ContractHandle::from_artifact(CONTRACT, artifact)
    }

    #[test]
    fn loads_shipped_artifact() {
        let artifact = ContractArtifact::load(ARTIFACT, "FreeNFT").unwrap();
        assert_eq!(artifact.contract_name, "FreeNFT");
        assert!(artifact.abi.function(SAFE_MINT).is_some());
    }

    #[test]
    fn rejects_artifact_for_other_contract() {
        let json = r#"{ "contractName": "Counter", "abi": [] }"#;
        let err = ContractArtifact::from_json(json, Path::new("Counter.json"), "FreeNFT")
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ArtifactMismatch { ref found, .. } if found == "Counter"
        ));
    }

    #[test]
    fn accepts_bare_abi_array() {
        let json = r#"[{
            "type": "function",
            "name": "safeMint",
            "inputs": [{ "name": "to", "type": "address", "internalType": "address" }],
            "outputs": [],
            "stateMutability": "nonpayable"
        }]"#;
        let artifact = ContractArtifact::from_json(json, Path::new("abi.json"), "FreeNFT").unwrap();
        assert_eq!(artifact.contract_name, "FreeNFT");
        assert_eq!(artifact.abi.function(SAFE_MINT).map(Vec::len), Some(1));
    }

    #[test]
    fn reports_unreadable_artifact() {
        let err = ContractArtifact::load("does/not/exist.json", "FreeNFT").unwrap_err();
        assert!(matches!(err, ConfigError::ArtifactRead { .. }));

        let err = ContractArtifact::from_json("{ nope", Path::new("x.json"), "FreeNFT")
            .unwrap_err();
        assert!(matches!(err, ConfigError::ArtifactParse { .. }));
    }

    #[test]
    fn safe_mint_encodes_selector_and_recipient() {
        let call = handle().safe_mint(SENDER, RECIPIENT).unwrap();

        assert_eq!(call.from, SENDER);
        assert_eq!(call.to, CONTRACT);
        assert_eq!(call.method, SAFE_MINT);
        assert_eq!(call.input.len(), 4 + 32);
        assert_eq!(&call.input[..4], &keccak256("safeMint(address)")[..4]);
        assert_eq!(&call.input[16..36], RECIPIENT.as_slice());
    }

    #[test]
    fn picks_overload_by_arity() {
        let handle = handle();
        let token_id = DynSolValue::Uint(U256::from(1), 256);
        let three = handle
            .encode_call(
                "safeTransferFrom",
                &[
                    DynSolValue::Address(SENDER),
                    DynSolValue::Address(RECIPIENT),
                    token_id.clone(),
                ],
            )
            .unwrap();
        let four = handle
            .encode_call(
                "safeTransferFrom",
                &[
                    DynSolValue::Address(SENDER),
                    DynSolValue::Address(RECIPIENT),
                    token_id,
                    DynSolValue::Bytes(vec![]),
                ],
            )
            .unwrap();
        assert_ne!(three[..4], four[..4]);
    }

    #[test]
    fn unknown_method_and_wrong_arity_fail() {
        let handle = handle();
        assert!(matches!(
            handle.encode_call("burn", &[]),
            Err(MintError::UnknownMethod(ref m)) if m == "burn"
        ));
        assert!(matches!(
            handle.encode_call(SAFE_MINT, &[]),
            Err(MintError::ArgumentCount { expected: 1, got: 0, .. })
        ));
    }

    #[test]
    fn wrong_argument_type_fails_to_encode() {
        let err = handle()
            .encode_call(SAFE_MINT, &[DynSolValue::Bool(true)])
            .unwrap_err();
        assert!(matches!(err, MintError::Encode(_)));
    }
}
