use std::collections::HashMap;
use std::str::FromStr;

use cosmwasm_std::{
    coins, from_json, to_json_vec, Addr, Binary, ContractResult, Empty, Int256, QueryRequest,
    SystemResult, Uint128, WasmQuery,
};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};
use truefund_dapp::config::DappConfig;
use truefund_dapp::dashboard::Dashboard;
use truefund_dapp::mock_truefund::NATIVE_DENOM;
use truefund_dapp::msg::{ExecuteMsg, InstantiateMsg};
use truefund_dapp::wallet::{TxHash, TxReceipt, TxRequest, Wallet};
use truefund_dapp::{mock_price_feed, mock_truefund, DappError};

pub const DEPLOYER: &str = "0x90f8bf6a479f320ead074411a4b0e7944ea8c9c1";
pub const STRANGER: &str = "0x1df62f291b2e969fb0849d99d9ce41e2f137006e";
pub const RECIPIENT: &str = "0xffcf8fdee72ac11b5c542428b35eef5769c409f0";

/// 1000 native units for every funded account
pub const INITIAL_BALANCE: u128 = 1_000_000_000_000_000_000_000;

/// 0.002 native per local unit
pub const USD_PRICE: i128 = 2_000_000_000_000_000;

pub fn truefund_contract() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        mock_truefund::execute,
        mock_truefund::instantiate,
        mock_truefund::query,
    ))
}

pub fn price_feed_contract() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        mock_price_feed::execute,
        mock_price_feed::instantiate,
        mock_price_feed::query,
    ))
}

/// Wallet backed by a multi-test chain. Transactions execute when sent and
/// their outcome is handed out by `wait_for_receipt`.
pub struct MultiTestWallet {
    pub app: App,
    pub account: String,
    pub connected: bool,
    /// number of transactions the user was asked to sign
    pub signatures: usize,
    pending: HashMap<TxHash, Result<AppResponse, String>>,
}

impl MultiTestWallet {
    fn new(app: App, account: &str) -> Self {
        MultiTestWallet {
            app,
            account: account.to_string(),
            connected: false,
            signatures: 0,
            pending: HashMap::new(),
        }
    }

    pub fn balance(&self, address: &str) -> Uint128 {
        self.app
            .wrap()
            .query_balance(address, NATIVE_DENOM)
            .unwrap()
            .amount
    }
}

impl Wallet for MultiTestWallet {
    fn account(&self) -> Option<String> {
        self.connected.then(|| self.account.clone())
    }

    fn connect(&mut self) -> Result<String, DappError> {
        self.connected = true;
        Ok(self.account.clone())
    }

    fn disconnect(&mut self) {
        self.connected = false;
    }

    fn query(&self, contract: &str, msg: &Binary) -> Result<Binary, DappError> {
        let request: QueryRequest<Empty> = QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: contract.to_string(),
            msg: msg.clone(),
        });

        match self.app.wrap().raw_query(&to_json_vec(&request)?) {
            SystemResult::Ok(ContractResult::Ok(res)) => Ok(res),
            SystemResult::Ok(ContractResult::Err(reason)) => Err(DappError::Reverted { reason }),
            SystemResult::Err(err) => Err(DappError::Network {
                reason: err.to_string(),
            }),
        }
    }

    fn send_transaction(&mut self, tx: TxRequest) -> Result<TxHash, DappError> {
        self.signatures += 1;

        let msg: ExecuteMsg = from_json(&tx.data)?;
        let funds = if tx.value.is_zero() {
            vec![]
        } else {
            coins(Uint128::from_str(&tx.value.to_string())?.u128(), NATIVE_DENOM)
        };

        let res = self
            .app
            .execute_contract(Addr::unchecked(tx.from), Addr::unchecked(tx.to), &msg, &funds)
            .map_err(|err| err.root_cause().to_string());

        let tx_hash = TxHash(format!("0x{:064x}", self.signatures));
        self.pending.insert(tx_hash.clone(), res);
        Ok(tx_hash)
    }

    fn wait_for_receipt(&mut self, tx_hash: &TxHash) -> Result<TxReceipt, DappError> {
        match self.pending.remove(tx_hash) {
            Some(Ok(_)) => Ok(TxReceipt {
                tx_hash: tx_hash.clone(),
                block_height: self.app.block_info().height,
            }),
            Some(Err(reason)) => Err(DappError::Reverted { reason }),
            None => Err(DappError::Network {
                reason: format!("unknown transaction {}", tx_hash),
            }),
        }
    }
}

pub struct DashboardSetup {
    pub dashboard: Dashboard<MultiTestWallet>,
    pub truefund_addr: Addr,
    pub feed_addr: Addr,
}

impl DashboardSetup {
    /// Deploys TrueFund and one oracle quoting `feed_answer`, then opens the
    /// dashboard with the wallet of `account` (not yet connected).
    pub fn new(account: &str, feed_answer: i128) -> Self {
        let mut app = App::new(|router, _, storage| {
            for funded in [DEPLOYER, STRANGER] {
                router
                    .bank
                    .init_balance(storage, &Addr::unchecked(funded), coins(INITIAL_BALANCE, NATIVE_DENOM))
                    .unwrap();
            }
        });

        let truefund_id = app.store_code(truefund_contract());
        let feed_id = app.store_code(price_feed_contract());

        let truefund_addr = app
            .instantiate_contract(
                truefund_id,
                Addr::unchecked(DEPLOYER),
                &InstantiateMsg {},
                &[],
                "truefund",
                None,
            )
            .unwrap();

        let feed_addr = app
            .instantiate_contract(
                feed_id,
                Addr::unchecked(DEPLOYER),
                &mock_price_feed::InstantiateMsg {
                    answer: Int256::from_i128(feed_answer),
                },
                &[],
                "usd-feed",
                None,
            )
            .unwrap();

        let mut config = DappConfig::bundled().unwrap();
        config.contract.address = truefund_addr.to_string();

        let wallet = MultiTestWallet::new(app, account);
        DashboardSetup {
            dashboard: Dashboard::new(config, Some(wallet)),
            truefund_addr,
            feed_addr,
        }
    }

    pub fn wallet(&self) -> &MultiTestWallet {
        self.dashboard.wallet().unwrap()
    }

    pub fn status(&self) -> String {
        self.dashboard.status().to_string()
    }
}
