//! Stand-in for the deployed TrueFund contract, used to drive the dashboard
//! end to end. It keeps the registry and feed bookkeeping the dashboard can
//! observe and nothing else.

use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, Event, MessageInfo, Response, StdError,
    StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::mock_price_feed::{LatestAnswerResponse, QueryMsg as FeedQueryMsg};
use crate::msg::{
    ExecuteMsg, InstantiateMsg, LatestPriceResponse, OrgNameResponse, PriceFeedAddressResponse,
    QueryMsg, ZERO_ADDRESS,
};
use crate::state::{PriceFeed, ADMIN, PRICE_FEEDS, RECIPIENTS};

const CONTRACT_NAME: &str = "crates.io:truefund-mock";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// native token base unit
pub const NATIVE_DENOM: &str = "wei";

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    // we set ourself as admin
    ADMIN.save(deps.storage, &info.sender)?;

    Ok(Response::new().add_attribute("admin", info.sender))
}

pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::RegisterRecipientWithOrg {
            recipient_address,
            recipient_org_name,
        } => try_register(deps, info, recipient_address, recipient_org_name),
        ExecuteMsg::RemoveRecipientWithOrg { recipient_address } => {
            try_remove_recipient(deps, info, recipient_address)
        }
        ExecuteMsg::AddPriceFeed {
            currency,
            price_feed_address,
            eth_per_local,
        } => try_add_price_feed(deps, info, currency, price_feed_address, eth_per_local),
        ExecuteMsg::RemovePriceFeed { currency } => try_remove_price_feed(deps, info, currency),
        ExecuteMsg::DonationToRecipient {
            recipient_address,
            currency_code,
            amount_in_local_currency,
        } => try_donate(
            deps,
            env,
            info,
            recipient_address,
            currency_code,
            amount_in_local_currency.to_string(),
        ),
    }
}

fn ensure_admin(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    let admin_addr = ADMIN.load(deps.storage)?;
    if info.sender != admin_addr {
        return Err(ContractError::Unauthorized {});
    }
    Ok(())
}

pub fn try_register(
    deps: DepsMut,
    info: MessageInfo,
    recipient_address: String,
    recipient_org_name: String,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info)?;

    RECIPIENTS.save(deps.storage, &recipient_address, &recipient_org_name)?;

    Ok(Response::new()
        .add_attribute("method", "register_recipient")
        .add_attribute("recipient", recipient_address)
        .add_attribute("org_name", recipient_org_name))
}

pub fn try_remove_recipient(
    deps: DepsMut,
    info: MessageInfo,
    recipient_address: String,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info)?;

    if !RECIPIENTS.has(deps.storage, &recipient_address) {
        return Err(ContractError::RecipientNotRegistered {});
    }
    RECIPIENTS.remove(deps.storage, &recipient_address);

    Ok(Response::new()
        .add_attribute("method", "remove_recipient")
        .add_event(
            Event::new("RecipientRemoved").add_attribute("recipientAddress", recipient_address),
        ))
}

pub fn try_add_price_feed(
    deps: DepsMut,
    info: MessageInfo,
    currency: String,
    price_feed_address: String,
    eth_per_local: bool,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info)?;

    let feed = PriceFeed {
        address: price_feed_address,
        eth_per_local,
    };
    PRICE_FEEDS.save(deps.storage, &currency, &feed)?;

    Ok(Response::new().add_attribute("method", "add_price_feed").add_event(
        Event::new("PriceFeedAdded")
            .add_attribute("currency", currency)
            .add_attribute("priceFeedAddress", feed.address)
            .add_attribute("isEthPerLocal", feed.eth_per_local.to_string()),
    ))
}

pub fn try_remove_price_feed(
    deps: DepsMut,
    info: MessageInfo,
    currency: String,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info)?;

    if !PRICE_FEEDS.has(deps.storage, &currency) {
        return Err(ContractError::PriceFeedNotSet {});
    }
    PRICE_FEEDS.remove(deps.storage, &currency);

    Ok(Response::new()
        .add_attribute("method", "remove_price_feed")
        .add_event(Event::new("PriceFeedRemoved").add_attribute("currency", currency)))
}

pub fn try_donate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    recipient_address: String,
    currency_code: String,
    local_amount: String,
) -> Result<Response, ContractError> {
    if !RECIPIENTS.has(deps.storage, &recipient_address) {
        return Err(ContractError::RecipientNotRegistered {});
    }
    if !PRICE_FEEDS.has(deps.storage, &currency_code) {
        return Err(ContractError::PriceFeedNotSet {});
    }

    // validate native funds sent
    if info.funds.len() != 1
        || info.funds[0].denom != NATIVE_DENOM
        || info.funds[0].amount.is_zero()
    {
        return Err(ContractError::InvalidDonation {});
    }

    Ok(Response::new().add_attribute("method", "donate").add_event(
        Event::new("DonationMade")
            .add_attribute("donor", info.sender)
            .add_attribute("recipient", recipient_address)
            .add_attribute("currency", currency_code)
            .add_attribute("localAmount", local_amount)
            .add_attribute("ethAmount", info.funds[0].amount),
    ))
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GetRecipientOrgName { recipient_address } => {
            to_json_binary(&query_org_name(deps, recipient_address)?)
        }
        QueryMsg::GetPriceFeedAddress { currency_code } => {
            to_json_binary(&query_feed_address(deps, currency_code)?)
        }
        QueryMsg::GetLatestPrice { currency_code } => {
            to_json_binary(&query_latest_price(deps, currency_code)?)
        }
    }
}

fn query_org_name(deps: Deps, recipient_address: String) -> StdResult<OrgNameResponse> {
    let org_name = RECIPIENTS
        .may_load(deps.storage, &recipient_address)?
        .unwrap_or_default();
    Ok(OrgNameResponse { org_name })
}

fn query_feed_address(deps: Deps, currency_code: String) -> StdResult<PriceFeedAddressResponse> {
    let feed_address = PRICE_FEEDS
        .may_load(deps.storage, &currency_code)?
        .map(|feed| feed.address)
        .unwrap_or_else(|| ZERO_ADDRESS.to_string());
    Ok(PriceFeedAddressResponse { feed_address })
}

/// forwards the oracle answer as is
fn query_latest_price(deps: Deps, currency_code: String) -> StdResult<LatestPriceResponse> {
    let feed = PRICE_FEEDS
        .may_load(deps.storage, &currency_code)?
        .ok_or_else(|| StdError::generic_err("Price feed not set"))?;

    let res: LatestAnswerResponse = deps
        .querier
        .query_wasm_smart(feed.address, &FeedQueryMsg::LatestAnswer {})?;

    Ok(LatestPriceResponse { price: res.answer })
}
