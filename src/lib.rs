pub mod calculator;
pub mod config;
pub mod dashboard;
pub mod dispatcher;
mod error;
pub mod form;
pub mod gate;
pub mod mock_price_feed;
pub mod mock_truefund;
pub mod msg;
pub mod state;
pub mod status;
pub mod testing;
pub mod wallet;

pub use crate::error::{ContractError, DappError};
