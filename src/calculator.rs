use std::str::FromStr;

use cosmwasm_std::{Decimal256, Int256, StdError, Uint256};

use crate::error::DappError;

/// 10^18, the fixed point scale of both local amounts and price quotes
pub const PRICE_SCALE: Uint256 = Uint256::from_u128(1_000_000_000_000_000_000);

/// Result of converting a local currency amount into native token units.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DonationValue {
    /// local amount with 18 fractional digits, sent as `amountInLocalCurrency`
    pub local_amount: Uint256,
    /// native base units attached to the donation call
    pub native_value: Uint256,
}

impl DonationValue {
    /// Native value as a human readable decimal, e.g. `0.2`, for a currency
    /// with `decimals` fractional digits. Digits past the 18th are cut off.
    pub fn native_display(&self, decimals: u32) -> Result<String, DappError> {
        let value = Decimal256::from_atomics(self.native_value, decimals)
            .map_err(|err| StdError::generic_err(err.to_string()))?;
        Ok(value.to_string())
    }
}

/// Parses a user supplied decimal amount into an integer with 18 fractional
/// digits. More precision than that is rejected rather than truncated.
///
/// A bare leading or trailing point is accepted, so `.5` and `1.` parse as
/// `0.5` and `1`.
pub fn scale_local_amount(amount: &str) -> Result<Uint256, DappError> {
    let decimal = Decimal256::from_str(&normalize(amount)).map_err(|err| DappError::InvalidAmount {
        amount: amount.to_string(),
        reason: reason_of(err),
    })?;
    Ok(decimal.atomics())
}

/// `floor(scaled(amount) * price / 10^18)`
///
/// `price` is the quote returned by the contract for the donation currency, in
/// native units per unit of local currency scaled by 10^18. Non positive
/// quotes mean the feed is unusable.
pub fn donation_value(local_amount: &str, price: Int256) -> Result<DonationValue, DappError> {
    if price <= Int256::zero() {
        return Err(DappError::InvalidPriceFeed {});
    }

    let local_amount = scale_local_amount(local_amount)?;
    let price = Uint256::from_str(&price.to_string())?;

    let native_value = local_amount
        .checked_mul(price)
        .map_err(StdError::from)?
        / PRICE_SCALE;

    Ok(DonationValue {
        local_amount,
        native_value,
    })
}

fn normalize(amount: &str) -> String {
    let amount = amount.trim();
    // "1." has no fractional part at all
    let amount = match amount.strip_suffix('.') {
        Some(whole) if !whole.contains('.') && !whole.is_empty() => whole,
        _ => amount,
    };
    if amount.starts_with('.') {
        format!("0{}", amount)
    } else {
        amount.to_string()
    }
}

fn reason_of(err: StdError) -> String {
    match err {
        StdError::GenericErr { msg, .. } => msg,
        err => err.to_string(),
    }
}
