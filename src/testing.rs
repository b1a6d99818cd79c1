//! In-memory wallet for exercising the dashboard without a chain.

use std::cell::RefCell;
use std::collections::HashMap;

use cosmwasm_std::{from_json, to_json_binary, Binary, Int256, StdResult};

use crate::error::DappError;
use crate::msg::{
    ExecuteMsg, LatestPriceResponse, OrgNameResponse, PriceFeedAddressResponse, QueryMsg,
    ZERO_ADDRESS,
};
use crate::wallet::{TxHash, TxReceipt, TxRequest, Wallet};

pub const MOCK_ACCOUNT: &str = "0x90f8bf6a479f320ead074411a4b0e7944ea8c9c1";
pub const MOCK_CONTRACT: &str = "0xcfeb869f69431e42cdb54a4f4f105c19c080a601";

/// Answers view calls from its tables and records everything it is asked to
/// do. Transactions are accepted unless a failure is injected; they do not
/// change the tables.
#[derive(Debug, Default)]
pub struct RecordingWallet {
    pub account: Option<String>,
    /// authorizable account returned by `connect`
    pub available_account: Option<String>,
    pub org_names: HashMap<String, String>,
    pub feeds: HashMap<String, String>,
    pub prices: HashMap<String, Int256>,
    pub sent: Vec<TxRequest>,
    pub queries: RefCell<Vec<QueryMsg>>,
    pub reject_signing: bool,
    pub network_down: bool,
    pub revert_reason: Option<String>,
    height: u64,
}

impl RecordingWallet {
    /// Wallet with an authorizable account, not yet connected.
    pub fn new() -> Self {
        RecordingWallet {
            available_account: Some(MOCK_ACCOUNT.to_string()),
            ..RecordingWallet::default()
        }
    }

    pub fn connected() -> Self {
        RecordingWallet {
            account: Some(MOCK_ACCOUNT.to_string()),
            ..RecordingWallet::new()
        }
    }

    pub fn with_price(mut self, currency: &str, price: i128) -> Self {
        self.prices
            .insert(currency.to_string(), Int256::from_i128(price));
        self
    }

    pub fn with_org(mut self, address: &str, org_name: &str) -> Self {
        self.org_names
            .insert(address.to_string(), org_name.to_string());
        self
    }

    pub fn with_feed(mut self, currency: &str, feed: &str) -> Self {
        self.feeds.insert(currency.to_string(), feed.to_string());
        self
    }

    /// Decoded calls of every transaction sent so far. Fails if any payload is
    /// not a contract call.
    pub fn sent_calls(&self) -> StdResult<Vec<ExecuteMsg>> {
        self.sent.iter().map(|tx| from_json(&tx.data)).collect()
    }
}

impl Wallet for RecordingWallet {
    fn account(&self) -> Option<String> {
        self.account.clone()
    }

    fn connect(&mut self) -> Result<String, DappError> {
        if self.reject_signing {
            return Err(DappError::Rejected {
                reason: "account access denied".to_string(),
            });
        }
        let account = self.available_account.clone().ok_or(DappError::Rejected {
            reason: "no accounts available".to_string(),
        })?;
        self.account = Some(account.clone());
        Ok(account)
    }

    fn disconnect(&mut self) {
        self.account = None;
    }

    fn query(&self, _contract: &str, msg: &Binary) -> Result<Binary, DappError> {
        if self.network_down {
            return Err(DappError::Network {
                reason: "connection refused".to_string(),
            });
        }

        let msg: QueryMsg = from_json(msg)?;
        self.queries.borrow_mut().push(msg.clone());

        let res = match msg {
            QueryMsg::GetRecipientOrgName { recipient_address } => to_json_binary(&OrgNameResponse {
                org_name: self
                    .org_names
                    .get(&recipient_address)
                    .cloned()
                    .unwrap_or_default(),
            })?,
            QueryMsg::GetPriceFeedAddress { currency_code } => {
                to_json_binary(&PriceFeedAddressResponse {
                    feed_address: self
                        .feeds
                        .get(&currency_code)
                        .cloned()
                        .unwrap_or_else(|| ZERO_ADDRESS.to_string()),
                })?
            }
            QueryMsg::GetLatestPrice { currency_code } => {
                let price = self.prices.get(&currency_code).ok_or(DappError::Reverted {
                    reason: "Price feed not set".to_string(),
                })?;
                to_json_binary(&LatestPriceResponse { price: *price })?
            }
        };
        Ok(res)
    }

    fn send_transaction(&mut self, tx: TxRequest) -> Result<TxHash, DappError> {
        if self.reject_signing {
            return Err(DappError::Rejected {
                reason: "user denied transaction signature".to_string(),
            });
        }
        if self.network_down {
            return Err(DappError::Network {
                reason: "connection refused".to_string(),
            });
        }
        self.sent.push(tx);
        Ok(TxHash(format!("0x{:064x}", self.sent.len())))
    }

    fn wait_for_receipt(&mut self, tx_hash: &TxHash) -> Result<TxReceipt, DappError> {
        if let Some(reason) = &self.revert_reason {
            return Err(DappError::Reverted {
                reason: reason.clone(),
            });
        }
        self.height += 1;
        Ok(TxReceipt {
            tx_hash: tx_hash.clone(),
            block_height: self.height,
        })
    }
}
