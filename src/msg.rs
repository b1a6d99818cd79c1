use cosmwasm_std::{Int256, Uint256};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// address the contract returns for a currency without a price feed
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Whether an address is the zero address, ignoring case and the `0x` prefix.
pub fn is_zero_address(address: &str) -> bool {
    let digits = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .unwrap_or(address);
    !digits.is_empty() && digits.chars().all(|c| c == '0')
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {}

/// State changing functions of the TrueFund contract, keyed by ABI name.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ExecuteMsg {
    #[serde(rename_all = "camelCase")]
    RegisterRecipientWithOrg {
        recipient_address: String,
        recipient_org_name: String,
    },
    #[serde(rename_all = "camelCase")]
    RemoveRecipientWithOrg { recipient_address: String },
    #[serde(rename_all = "camelCase")]
    DonationToRecipient {
        recipient_address: String,
        currency_code: String,
        /// local amount with 18 fractional digits
        amount_in_local_currency: Uint256,
    },
    #[serde(rename_all = "camelCase")]
    AddPriceFeed {
        currency: String,
        price_feed_address: String,
        eth_per_local: bool,
    },
    #[serde(rename_all = "camelCase")]
    RemovePriceFeed { currency: String },
}

impl ExecuteMsg {
    pub fn function_name(&self) -> &'static str {
        match self {
            ExecuteMsg::RegisterRecipientWithOrg { .. } => "registerRecipientWithOrg",
            ExecuteMsg::RemoveRecipientWithOrg { .. } => "removeRecipientWithOrg",
            ExecuteMsg::DonationToRecipient { .. } => "donationToRecipient",
            ExecuteMsg::AddPriceFeed { .. } => "addPriceFeed",
            ExecuteMsg::RemovePriceFeed { .. } => "removePriceFeed",
        }
    }
}

/// View functions of the TrueFund contract.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum QueryMsg {
    #[serde(rename_all = "camelCase")]
    GetRecipientOrgName { recipient_address: String },
    #[serde(rename_all = "camelCase")]
    GetPriceFeedAddress { currency_code: String },
    #[serde(rename_all = "camelCase")]
    GetLatestPrice { currency_code: String },
}

impl QueryMsg {
    pub fn function_name(&self) -> &'static str {
        match self {
            QueryMsg::GetRecipientOrgName { .. } => "getRecipientOrgName",
            QueryMsg::GetPriceFeedAddress { .. } => "getPriceFeedAddress",
            QueryMsg::GetLatestPrice { .. } => "getLatestPrice",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrgNameResponse {
    pub org_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriceFeedAddressResponse {
    pub feed_address: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct LatestPriceResponse {
    /// native units per unit of local currency, scaled by 10^18
    pub price: Int256,
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::{from_json, to_json_binary};

    #[test]
    fn execute_msg_uses_abi_names() {
        let msg = ExecuteMsg::RegisterRecipientWithOrg {
            recipient_address: "0xabc".to_string(),
            recipient_org_name: "Red Cross".to_string(),
        };
        let bin = to_json_binary(&msg).unwrap();
        assert_eq!(
            bin.to_vec(),
            br#"{"registerRecipientWithOrg":{"recipientAddress":"0xabc","recipientOrgName":"Red Cross"}}"#
                .to_vec()
        );
        assert_eq!(msg.function_name(), "registerRecipientWithOrg");
    }

    #[test]
    fn donation_amount_travels_as_string() {
        let msg = ExecuteMsg::DonationToRecipient {
            recipient_address: "0xabc".to_string(),
            currency_code: "USD".to_string(),
            amount_in_local_currency: Uint256::from(5_u64),
        };
        let bin = to_json_binary(&msg).unwrap();
        assert_eq!(
            bin.to_vec(),
            br#"{"donationToRecipient":{"recipientAddress":"0xabc","currencyCode":"USD","amountInLocalCurrency":"5"}}"#
                .to_vec()
        );
    }

    #[test]
    fn negative_price_decodes() {
        let res: LatestPriceResponse = from_json(br#"{"price":"-42"}"#).unwrap();
        assert_eq!(res.price, Int256::from_i128(-42));
    }

    #[test]
    fn zero_address_detection() {
        assert!(is_zero_address(ZERO_ADDRESS));
        assert!(is_zero_address("0x0"));
        assert!(!is_zero_address("0x"));
        assert!(!is_zero_address(""));
        assert!(!is_zero_address("0x00000000000000000000000000000000000000a1"));
    }
}
