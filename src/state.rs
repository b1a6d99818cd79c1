use cosmwasm_std::{Addr, Int256};
use cw_storage_plus::{Item, Map};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct PriceFeed {
    /// oracle contract queried for the latest answer
    pub address: String,
    /// whether the oracle quotes native units per local unit
    pub eth_per_local: bool,
}

/// store admin address
pub const ADMIN: Item<Addr> = Item::new("admin_addr");

/// recipient address to organization name
pub const RECIPIENTS: Map<&str, String> = Map::new("recipients");

/// currency code to price feed
pub const PRICE_FEEDS: Map<&str, PriceFeed> = Map::new("price_feeds");

/// answer served by the mock oracle
pub const LATEST_ANSWER: Item<Int256> = Item::new("latest_answer");
