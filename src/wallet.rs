use std::fmt;

use cosmwasm_std::{Binary, Uint256};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::DappError;

/// Transaction the wallet is asked to sign and broadcast.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct TxRequest {
    pub from: String,
    /// contract address
    pub to: String,
    /// json encoded contract call
    pub data: Binary,
    /// native base units attached to the call
    pub value: Uint256,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, JsonSchema)]
pub struct TxHash(pub String);

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct TxReceipt {
    pub tx_hash: TxHash,
    pub block_height: u64,
}

/// External wallet: holds the keys, signs, and talks to the chain.
///
/// Everything the dashboard does remotely goes through this trait, so hosts
/// plug in a browser provider and tests plug in a mock.
pub trait Wallet {
    /// Currently authorized account, if any.
    fn account(&self) -> Option<String>;

    /// Asks the user to authorize an account.
    fn connect(&mut self) -> Result<String, DappError>;

    fn disconnect(&mut self);

    /// Read only contract call, never signs.
    fn query(&self, contract: &str, msg: &Binary) -> Result<Binary, DappError>;

    /// Signs and broadcasts, returning once the network accepted the transaction.
    fn send_transaction(&mut self, tx: TxRequest) -> Result<TxHash, DappError>;

    /// Blocks until the transaction is included.
    fn wait_for_receipt(&mut self, tx_hash: &TxHash) -> Result<TxReceipt, DappError>;
}
