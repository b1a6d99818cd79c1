use std::fs;
use std::path::Path;

use cosmwasm_std::from_json;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::DappError;

/// file the configuration hints point users at
pub const CONFIG_FILE: &str = "contract_config.json";

const BUNDLED_CONFIG: &str = include_str!("../contract_config.json");

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DappConfig {
    pub chain: ChainConfig,
    pub contract: ContractDescriptor,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig {
    pub id: u64,
    pub name: String,
    pub network: String,
    pub native_currency: NativeCurrency,
    pub rpc_url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

/// Deployment address plus the interface description of the remote contract.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ContractDescriptor {
    pub address: String,
    pub abi: Vec<AbiEntry>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AbiEntry {
    /// function, event, constructor, ...
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub inputs: Vec<AbiParam>,
    #[serde(default)]
    pub outputs: Option<Vec<AbiParam>>,
    #[serde(default)]
    pub state_mutability: Option<String>,
    #[serde(default)]
    pub anonymous: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AbiParam {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub internal_type: Option<String>,
    #[serde(default)]
    pub indexed: Option<bool>,
}

impl DappConfig {
    /// Configuration shipped with the crate: Ganache Local and the TrueFund
    /// ABI, without a deployment address.
    pub fn bundled() -> Result<Self, DappError> {
        Self::from_slice(BUNDLED_CONFIG.as_bytes())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DappError> {
        let path = path.as_ref();
        let raw = fs::read(path).map_err(|err| DappError::Config {
            reason: format!("{}: {}", path.display(), err),
        })?;
        Self::from_slice(&raw)
    }

    pub fn from_slice(raw: &[u8]) -> Result<Self, DappError> {
        from_json(raw).map_err(|err| DappError::Config {
            reason: err.to_string(),
        })
    }
}

impl ContractDescriptor {
    pub fn address_set(&self) -> bool {
        !self.address.trim().is_empty()
    }

    pub fn abi_set(&self) -> bool {
        !self.abi.is_empty()
    }

    /// both pieces must be present before any contract action is enabled
    pub fn is_ready(&self) -> bool {
        self.address_set() && self.abi_set()
    }

    pub fn function(&self, name: &str) -> Option<&AbiEntry> {
        self.abi
            .iter()
            .find(|entry| entry.kind == "function" && entry.name.as_deref() == Some(name))
    }

    /// Looks up a function the dashboard is about to call.
    pub fn require_function(&self, name: &str) -> Result<&AbiEntry, DappError> {
        self.function(name).ok_or_else(|| DappError::UnknownFunction {
            name: name.to_string(),
        })
    }
}

impl AbiEntry {
    pub fn is_payable(&self) -> bool {
        self.state_mutability.as_deref() == Some("payable")
    }

    pub fn is_view(&self) -> bool {
        matches!(self.state_mutability.as_deref(), Some("view") | Some("pure"))
    }
}
