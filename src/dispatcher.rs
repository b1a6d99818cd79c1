use cosmwasm_std::{attr, from_json, to_json_binary, Attribute, Int256, Uint256};
use log::{debug, warn};

use crate::calculator::{donation_value, DonationValue};
use crate::config::{ContractDescriptor, NativeCurrency};
use crate::error::DappError;
use crate::form::FormState;
use crate::msg::{
    is_zero_address, ExecuteMsg, LatestPriceResponse, OrgNameResponse, PriceFeedAddressResponse,
    QueryMsg,
};
use crate::wallet::{TxReceipt, TxRequest, Wallet};

/// Buttons of the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    RegisterRecipient,
    RemoveRecipient,
    AddPriceFeed,
    RemovePriceFeed,
    Donate,
    QueryRecipient,
    QueryPriceFeed,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::RegisterRecipient,
        Action::RemoveRecipient,
        Action::AddPriceFeed,
        Action::RemovePriceFeed,
        Action::Donate,
        Action::QueryRecipient,
        Action::QueryPriceFeed,
    ];

    pub fn pending_message(&self) -> &'static str {
        match self {
            Action::RegisterRecipient => "Registering recipient...",
            Action::RemoveRecipient => "Removing recipient...",
            Action::AddPriceFeed => "Adding price feed...",
            Action::RemovePriceFeed => "Removing price feed...",
            Action::Donate => "Sending donation...",
            Action::QueryRecipient => "Checking recipient registration...",
            Action::QueryPriceFeed => "Checking price feed...",
        }
    }

    pub fn method(&self) -> &'static str {
        match self {
            Action::RegisterRecipient => "register_recipient",
            Action::RemoveRecipient => "remove_recipient",
            Action::AddPriceFeed => "add_price_feed",
            Action::RemovePriceFeed => "remove_price_feed",
            Action::Donate => "donate",
            Action::QueryRecipient => "query_recipient",
            Action::QueryPriceFeed => "query_price_feed",
        }
    }
}

/// Value read back by a lookup action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lookup {
    /// `None` when the address has no organization
    RecipientOrgName(Option<String>),
    /// `None` when the currency has no feed (zero address)
    PriceFeedAddress(Option<String>),
}

/// Successful completion of one action.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionOutcome {
    pub message: String,
    pub lookup: Option<Lookup>,
    pub attributes: Vec<Attribute>,
}

impl ActionOutcome {
    fn new(action: Action, message: impl Into<String>) -> Self {
        ActionOutcome {
            message: message.into(),
            lookup: None,
            attributes: vec![attr("method", action.method())],
        }
    }

    fn add_attribute(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attributes.push(attr(key, value));
        self
    }
}

/// Turns one user action into exactly one remote call.
pub struct ContractCallDispatcher<'a, W: Wallet> {
    contract: &'a ContractDescriptor,
    wallet: Option<&'a mut W>,
    /// currency of the value attached to donations
    native: &'a NativeCurrency,
}

impl<'a, W: Wallet> ContractCallDispatcher<'a, W> {
    pub fn new(
        contract: &'a ContractDescriptor,
        wallet: Option<&'a mut W>,
        native: &'a NativeCurrency,
    ) -> Self {
        ContractCallDispatcher {
            contract,
            wallet,
            native,
        }
    }

    pub fn dispatch(&mut self, action: Action, form: &FormState) -> Result<ActionOutcome, DappError> {
        debug!("dispatching {} against {}", action.method(), self.contract.address);
        let res = match action {
            Action::RegisterRecipient => self.try_register_recipient(form),
            Action::RemoveRecipient => self.try_remove_recipient(form),
            Action::AddPriceFeed => self.try_add_price_feed(form),
            Action::RemovePriceFeed => self.try_remove_price_feed(form),
            Action::Donate => self.try_donate(form),
            Action::QueryRecipient => self.query_recipient(form),
            Action::QueryPriceFeed => self.query_price_feed(form),
        };
        if let Err(err) = &res {
            warn!("{} failed: {}", action.method(), err);
        }
        res
    }

    pub fn try_register_recipient(&mut self, form: &FormState) -> Result<ActionOutcome, DappError> {
        let msg = ExecuteMsg::RegisterRecipientWithOrg {
            recipient_address: form.recipient_address.clone(),
            recipient_org_name: form.org_name.clone(),
        };
        let receipt = self.execute(&msg, Uint256::zero())?;

        Ok(ActionOutcome::new(Action::RegisterRecipient, "Recipient registered!")
            .add_attribute("recipient", &form.recipient_address)
            .add_attribute("org_name", &form.org_name)
            .add_attribute("tx_hash", receipt.tx_hash.to_string()))
    }

    pub fn try_remove_recipient(&mut self, form: &FormState) -> Result<ActionOutcome, DappError> {
        let msg = ExecuteMsg::RemoveRecipientWithOrg {
            recipient_address: form.recipient_address.clone(),
        };
        let receipt = self.execute(&msg, Uint256::zero())?;

        Ok(ActionOutcome::new(Action::RemoveRecipient, "Recipient removed!")
            .add_attribute("recipient", &form.recipient_address)
            .add_attribute("tx_hash", receipt.tx_hash.to_string()))
    }

    pub fn try_add_price_feed(&mut self, form: &FormState) -> Result<ActionOutcome, DappError> {
        let msg = ExecuteMsg::AddPriceFeed {
            currency: form.feed_currency.clone(),
            price_feed_address: form.feed_address.clone(),
            eth_per_local: form.eth_per_local,
        };
        let receipt = self.execute(&msg, Uint256::zero())?;

        Ok(ActionOutcome::new(Action::AddPriceFeed, "Price feed added!")
            .add_attribute("currency", &form.feed_currency)
            .add_attribute("feed", &form.feed_address)
            .add_attribute("eth_per_local", form.eth_per_local.to_string())
            .add_attribute("tx_hash", receipt.tx_hash.to_string()))
    }

    pub fn try_remove_price_feed(&mut self, form: &FormState) -> Result<ActionOutcome, DappError> {
        let msg = ExecuteMsg::RemovePriceFeed {
            currency: form.feed_currency.clone(),
        };
        let receipt = self.execute(&msg, Uint256::zero())?;

        Ok(ActionOutcome::new(Action::RemovePriceFeed, "Price feed removed!")
            .add_attribute("currency", &form.feed_currency)
            .add_attribute("tx_hash", receipt.tx_hash.to_string()))
    }

    pub fn try_donate(&mut self, form: &FormState) -> Result<ActionOutcome, DappError> {
        // price comes from the contract itself, as native units per local unit
        let price = self.latest_price(&form.currency_code)?;
        let value: DonationValue = donation_value(&form.donation_amount, price)?;

        let msg = ExecuteMsg::DonationToRecipient {
            recipient_address: form.recipient_address.clone(),
            currency_code: form.currency_code.clone(),
            amount_in_local_currency: value.local_amount,
        };
        let receipt = self.execute(&msg, value.native_value)?;

        Ok(ActionOutcome::new(
            Action::Donate,
            format!(
                "Donation sent! ({} {})",
                value.native_display(self.native.decimals)?,
                self.native.symbol
            ),
        )
        .add_attribute("recipient", &form.recipient_address)
        .add_attribute("currency", &form.currency_code)
        .add_attribute("local_amount", value.local_amount.to_string())
        .add_attribute("price", price.to_string())
        .add_attribute("native_value", value.native_value.to_string())
        .add_attribute("tx_hash", receipt.tx_hash.to_string()))
    }

    pub fn query_recipient(&self, form: &FormState) -> Result<ActionOutcome, DappError> {
        let res: OrgNameResponse = self.query(&QueryMsg::GetRecipientOrgName {
            recipient_address: form.check_recipient_address.clone(),
        })?;

        let (message, org_name) = if res.org_name.is_empty() {
            ("Not registered".to_string(), None)
        } else {
            (format!("Registered: {}", res.org_name), Some(res.org_name))
        };

        let mut outcome = ActionOutcome::new(Action::QueryRecipient, message)
            .add_attribute("recipient", &form.check_recipient_address);
        outcome.lookup = Some(Lookup::RecipientOrgName(org_name));
        Ok(outcome)
    }

    pub fn query_price_feed(&self, form: &FormState) -> Result<ActionOutcome, DappError> {
        let res: PriceFeedAddressResponse = self.query(&QueryMsg::GetPriceFeedAddress {
            currency_code: form.check_currency_code.clone(),
        })?;

        let (message, feed) =
            if res.feed_address.is_empty() || is_zero_address(&res.feed_address) {
                ("No price feed set".to_string(), None)
            } else {
                (
                    format!("Price feed set: {}", res.feed_address),
                    Some(res.feed_address),
                )
            };

        let mut outcome = ActionOutcome::new(Action::QueryPriceFeed, message)
            .add_attribute("currency", &form.check_currency_code);
        outcome.lookup = Some(Lookup::PriceFeedAddress(feed));
        Ok(outcome)
    }

    /// Latest quote for `currency`. A revert here means the currency has no
    /// usable feed.
    fn latest_price(&self, currency: &str) -> Result<Int256, DappError> {
        let res: LatestPriceResponse = self
            .query(&QueryMsg::GetLatestPrice {
                currency_code: currency.to_string(),
            })
            .map_err(|err| match err {
                DappError::Reverted { .. } => DappError::InvalidPriceFeed {},
                err => err,
            })?;
        Ok(res.price)
    }

    fn query<T: serde::de::DeserializeOwned>(&self, msg: &QueryMsg) -> Result<T, DappError> {
        let function = self.contract.require_function(msg.function_name())?;
        if !function.is_view() {
            return Err(DappError::NotView {
                name: msg.function_name().to_string(),
            });
        }
        let wallet = self.wallet.as_deref().ok_or(DappError::NoWallet {})?;
        let res = wallet.query(&self.contract.address, &to_json_binary(msg)?)?;
        Ok(from_json(&res)?)
    }

    fn execute(&mut self, msg: &ExecuteMsg, value: Uint256) -> Result<TxReceipt, DappError> {
        let function = self.contract.require_function(msg.function_name())?;
        if !value.is_zero() && !function.is_payable() {
            return Err(DappError::NotPayable {
                name: msg.function_name().to_string(),
            });
        }

        let wallet = self.wallet.as_deref_mut().ok_or(DappError::NoWallet {})?;
        let from = wallet.account().ok_or(DappError::WalletNotConnected {})?;

        let tx_hash = wallet.send_transaction(TxRequest {
            from,
            to: self.contract.address.clone(),
            data: to_json_binary(msg)?,
            value,
        })?;
        debug!("{} submitted as {}", msg.function_name(), tx_hash);

        wallet.wait_for_receipt(&tx_hash)
    }
}
