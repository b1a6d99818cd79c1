use std::fmt;

use crate::config::{ContractDescriptor, CONFIG_FILE};

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum WalletStatus {
    /// no wallet capability available at all
    #[default]
    NoWallet,
    Disconnected,
    Connecting,
    Connected { address: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WalletEvent {
    ProviderDetected,
    ConnectRequested,
    Connected { address: String },
    ConnectFailed { reason: String },
    Disconnected,
}

/// Wallet side of the gate, owned by the wallet provider and only mirrored
/// here.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct WalletSession {
    pub status: WalletStatus,
    /// last connection error, cleared by the next attempt
    pub error: Option<String>,
}

impl WalletSession {
    pub fn reduce(self, event: WalletEvent) -> Self {
        let WalletSession { status, error } = self;
        match (status, event) {
            (WalletStatus::NoWallet, WalletEvent::ProviderDetected) => WalletSession {
                status: WalletStatus::Disconnected,
                error,
            },
            // nothing to connect through
            (WalletStatus::NoWallet, _) => WalletSession {
                status: WalletStatus::NoWallet,
                error,
            },
            (WalletStatus::Disconnected, WalletEvent::ConnectRequested) => WalletSession {
                status: WalletStatus::Connecting,
                error: None,
            },
            (WalletStatus::Connecting, WalletEvent::ConnectFailed { reason }) => WalletSession {
                status: WalletStatus::Disconnected,
                error: Some(reason),
            },
            // the provider may report an account without an explicit request
            (WalletStatus::Connecting, WalletEvent::Connected { address })
            | (WalletStatus::Disconnected, WalletEvent::Connected { address }) => WalletSession {
                status: WalletStatus::Connected { address },
                error: None,
            },
            (WalletStatus::Connected { .. }, WalletEvent::Connected { address }) => {
                WalletSession {
                    status: WalletStatus::Connected { address },
                    error,
                }
            }
            (_, WalletEvent::Disconnected) => WalletSession {
                status: WalletStatus::Disconnected,
                error: None,
            },
            (status, _) => WalletSession { status, error },
        }
    }

    pub fn address(&self) -> Option<&str> {
        match &self.status {
            WalletStatus::Connected { address } => Some(address),
            _ => None,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.address().is_some()
    }
}

/// Precondition that keeps the contract actions hidden.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unmet {
    ContractAddress,
    ContractAbi,
    Wallet,
}

impl fmt::Display for Unmet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unmet::ContractAddress => write!(
                f,
                "Please set your deployed contract address in {}.",
                CONFIG_FILE
            ),
            Unmet::ContractAbi => {
                write!(f, "Please paste your contract ABI array in {}.", CONFIG_FILE)
            }
            Unmet::Wallet => f.write_str("Connect your wallet to use the contract actions."),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateView {
    ContractActions,
    Placeholder(Vec<Unmet>),
}

/// Configuration is fixed at startup; only the wallet side moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionGate {
    pub wallet: WalletSession,
    address_set: bool,
    abi_set: bool,
    config_ready: bool,
}

impl ConnectionGate {
    pub fn new(contract: &ContractDescriptor, wallet_available: bool) -> Self {
        let wallet = WalletSession::default();
        let wallet = if wallet_available {
            wallet.reduce(WalletEvent::ProviderDetected)
        } else {
            wallet
        };
        ConnectionGate {
            wallet,
            address_set: contract.address_set(),
            abi_set: contract.abi_set(),
            config_ready: contract.is_ready(),
        }
    }

    pub fn on_wallet(&mut self, event: WalletEvent) {
        self.wallet = std::mem::take(&mut self.wallet).reduce(event);
    }

    pub fn config_ready(&self) -> bool {
        self.config_ready
    }

    pub fn unmet(&self) -> Vec<Unmet> {
        let mut unmet = vec![];
        if !self.address_set {
            unmet.push(Unmet::ContractAddress);
        }
        if !self.abi_set {
            unmet.push(Unmet::ContractAbi);
        }
        if !self.wallet.is_connected() {
            unmet.push(Unmet::Wallet);
        }
        unmet
    }

    pub fn view(&self) -> GateView {
        let unmet = self.unmet();
        if unmet.is_empty() {
            GateView::ContractActions
        } else {
            GateView::Placeholder(unmet)
        }
    }

    pub fn actions_enabled(&self) -> bool {
        self.view() == GateView::ContractActions
    }
}
