use log::{info, warn};

use crate::config::DappConfig;
use crate::dispatcher::{Action, ActionOutcome, ContractCallDispatcher, Lookup};
use crate::error::DappError;
use crate::form::{FormEvent, FormField, FormState};
use crate::gate::{ConnectionGate, GateView, WalletEvent, WalletStatus};
use crate::status::{StatusBoard, StatusMessage, Ticket};
use crate::wallet::Wallet;

const TITLE: &str = "TrueFund DApp";
const WAITING_FOR_CONFIG: &str =
    "Waiting for contract configuration. Wallet connect is available above.";

/// Last values read back by the lookup panels.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lookups {
    pub recipient_org_name: Option<String>,
    pub price_feed_address: Option<String>,
}

/// A button press that has started but not settled yet.
#[derive(Clone, Debug)]
pub struct PendingAction {
    pub action: Action,
    ticket: Ticket,
    form: FormState,
}

/// The whole page: configuration, wallet, forms and the status line.
pub struct Dashboard<W: Wallet> {
    config: DappConfig,
    wallet: Option<W>,
    gate: ConnectionGate,
    form: FormState,
    status: StatusBoard,
    lookups: Lookups,
}

impl<W: Wallet> Dashboard<W> {
    pub fn new(config: DappConfig, wallet: Option<W>) -> Self {
        let mut gate = ConnectionGate::new(&config.contract, wallet.is_some());
        // pick up an account the wallet already authorized
        if let Some(address) = wallet.as_ref().and_then(|wallet| wallet.account()) {
            gate.on_wallet(WalletEvent::Connected { address });
        }

        Dashboard {
            config,
            wallet,
            gate,
            form: FormState::default(),
            status: StatusBoard::default(),
            lookups: Lookups::default(),
        }
    }

    pub fn config(&self) -> &DappConfig {
        &self.config
    }

    pub fn gate(&self) -> &ConnectionGate {
        &self.gate
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn status(&self) -> &StatusMessage {
        self.status.message()
    }

    pub fn lookups(&self) -> &Lookups {
        &self.lookups
    }

    pub fn wallet(&self) -> Option<&W> {
        self.wallet.as_ref()
    }

    pub fn input(&mut self, field: FormField, value: impl Into<String>) {
        self.apply(FormEvent::Input {
            field,
            value: value.into(),
        });
    }

    pub fn toggle_eth_per_local(&mut self, checked: bool) {
        self.apply(FormEvent::EthPerLocal(checked));
    }

    fn apply(&mut self, event: FormEvent) {
        self.form = std::mem::take(&mut self.form).apply(event);
    }

    pub fn connect(&mut self) {
        self.gate.on_wallet(WalletEvent::ConnectRequested);
        let wallet = match self.wallet.as_mut() {
            Some(wallet) => wallet,
            None => return,
        };

        match wallet.connect() {
            Ok(address) => {
                info!("wallet connected as {}", address);
                self.gate.on_wallet(WalletEvent::Connected { address });
            }
            Err(err) => {
                warn!("wallet connection failed: {}", err);
                self.gate.on_wallet(WalletEvent::ConnectFailed {
                    reason: err.to_string(),
                });
            }
        }
    }

    pub fn disconnect(&mut self) {
        if let Some(wallet) = self.wallet.as_mut() {
            wallet.disconnect();
        }
        self.gate.on_wallet(WalletEvent::Disconnected);
    }

    /// Runs one button press to completion and returns the resulting status.
    pub fn click(&mut self, action: Action) -> Result<&StatusMessage, DappError> {
        let pending = self.start(action)?;
        let res = self.perform(&pending);
        Ok(self.finish(pending, res))
    }

    /// First half of a button press: the pending text replaces whatever the
    /// status showed, even if an earlier action is still in flight. The form
    /// is captured as it is now.
    ///
    /// Buttons only exist while the gate is open; pressing one otherwise is an
    /// error and leaves the status untouched.
    pub fn start(&mut self, action: Action) -> Result<PendingAction, DappError> {
        if !self.gate.actions_enabled() {
            return Err(DappError::ActionsLocked {});
        }

        let ticket = self.status.begin(action.pending_message());
        Ok(PendingAction {
            action,
            ticket,
            form: self.form.clone(),
        })
    }

    /// Remote part of a started action. Leaves the status line alone.
    pub fn perform(&mut self, pending: &PendingAction) -> Result<ActionOutcome, DappError> {
        ContractCallDispatcher::new(
            &self.config.contract,
            self.wallet.as_mut(),
            &self.config.chain.native_currency,
        )
        .dispatch(pending.action, &pending.form)
    }

    /// Settles a started action. Results of actions superseded by a later
    /// `start` are dropped, lookups included.
    pub fn finish(
        &mut self,
        pending: PendingAction,
        res: Result<ActionOutcome, DappError>,
    ) -> &StatusMessage {
        let message = match &res {
            Ok(outcome) => StatusMessage::Success(outcome.message.clone()),
            Err(err) => StatusMessage::from(err),
        };
        if self.status.settle(pending.ticket, message) {
            if let Ok(outcome) = &res {
                self.record(outcome);
            }
        }
        self.status.message()
    }

    fn record(&mut self, outcome: &ActionOutcome) {
        match &outcome.lookup {
            Some(Lookup::RecipientOrgName(name)) => {
                self.lookups.recipient_org_name = name.clone();
            }
            Some(Lookup::PriceFeedAddress(address)) => {
                self.lookups.price_feed_address = address.clone();
            }
            None => {}
        }
        let attributes = outcome
            .attributes
            .iter()
            .map(|attr| format!("{}={}", attr.key, attr.value))
            .collect::<Vec<_>>()
            .join(" ");
        info!("{}", attributes);
    }

    /// Plain text rendering of the page.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let contract = &self.config.contract;
        let chain = &self.config.chain;

        line(&mut out, TITLE);
        line(&mut out, format!("Network: {} (chain {})", chain.name, chain.id));
        self.render_wallet(&mut out);

        let address = if contract.address_set() {
            contract.address.as_str()
        } else {
            "Not set"
        };
        line(&mut out, format!("Contract address: {}", address));

        match self.gate.view() {
            GateView::ContractActions => {
                line(&mut out, "Integrate contract features below...");
                self.render_price_feed_actions(&mut out);
                self.render_contract_actions(&mut out);
            }
            GateView::Placeholder(unmet) => {
                for reason in &unmet {
                    line(&mut out, reason.to_string());
                }
                if !self.gate.config_ready() {
                    line(&mut out, WAITING_FOR_CONFIG);
                }
            }
        }
        out
    }

    fn render_wallet(&self, out: &mut String) {
        match &self.gate.wallet.status {
            WalletStatus::NoWallet => {
                line(out, "[Connect Wallet] (disabled)");
                line(out, "No wallet connector found.");
            }
            WalletStatus::Disconnected => line(out, "[Connect Wallet]"),
            WalletStatus::Connecting => line(out, "[Connecting...]"),
            WalletStatus::Connected { address } => {
                line(out, format!("Connected wallet: {}", address));
                line(out, "[Disconnect]");
            }
        }
        if let Some(error) = &self.gate.wallet.error {
            line(out, format!("Error: {}", error));
        }
    }

    fn render_price_feed_actions(&self, out: &mut String) {
        let form = &self.form;
        let checkbox = if form.eth_per_local { "x" } else { " " };

        line(out, "== Price Feed Actions ==");
        line(out, format!("Currency Code (e.g. USD): {}", form.feed_currency));
        line(out, format!("Price Feed Address: {}", form.feed_address));
        line(out, format!("[{}] ETH per Local", checkbox));
        line(out, "[Add Price Feed] [Remove Price Feed]");
    }

    fn render_contract_actions(&self, out: &mut String) {
        let form = &self.form;

        line(out, "== Contract Actions ==");
        line(out, "-- Register Recipient --");
        line(out, format!("Recipient Address: {}", form.recipient_address));
        line(out, format!("Org Name: {}", form.org_name));
        line(out, "[Register] [Remove]");

        line(out, "-- Make Donation --");
        line(out, format!("Currency Code (e.g. USD): {}", form.currency_code));
        line(out, format!("Amount: {}", form.donation_amount));
        line(out, "[Donate]");

        line(out, "-- Check Recipient Registration --");
        line(out, format!("Recipient Address: {}", form.check_recipient_address));
        line(out, "[Check]");
        if let Some(name) = &self.lookups.recipient_org_name {
            line(out, format!("Org Name: {}", name));
        }

        line(out, "-- Check Price Feed Status --");
        line(out, format!("Currency Code (e.g. USD): {}", form.check_currency_code));
        line(out, "[Check]");
        if let Some(address) = &self.lookups.price_feed_address {
            line(out, format!("Price Feed Address: {}", address));
        }

        line(out, format!("Status: {}", self.status.message()));
    }
}

fn line(out: &mut String, text: impl AsRef<str>) {
    out.push_str(text.as_ref());
    out.push('\n');
}
