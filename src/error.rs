use cosmwasm_std::StdError;
use thiserror::Error;

/// Errors surfaced by the dashboard. Every variant ends up as the status line.
#[derive(Error, Debug, PartialEq)]
pub enum DappError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("No wallet found")]
    NoWallet {},

    #[error("Wallet not connected")]
    WalletNotConnected {},

    #[error("User rejected the request: {reason}")]
    Rejected { reason: String },

    #[error("Network error: {reason}")]
    Network { reason: String },

    #[error("Execution reverted: {reason}")]
    Reverted { reason: String },

    #[error("Invalid price feed value")]
    InvalidPriceFeed {},

    #[error("Invalid amount {amount:?}: {reason}")]
    InvalidAmount { amount: String, reason: String },

    #[error("Function {name} is not part of the contract interface")]
    UnknownFunction { name: String },

    #[error("Function {name} does not accept a value")]
    NotPayable { name: String },

    #[error("Function {name} is not read only")]
    NotView { name: String },

    #[error("Invalid configuration: {reason}")]
    Config { reason: String },

    #[error("Contract actions are unavailable until the wallet is connected and the contract is configured")]
    ActionsLocked {},
}

/// Errors raised by the mock TrueFund contract and price feed.
#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Recipient not registered")]
    RecipientNotRegistered {},

    #[error("Price feed not set")]
    PriceFeedNotSet {},

    #[error("Invalid donation")]
    InvalidDonation {},
}
