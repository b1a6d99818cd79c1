pub mod dashboard_setup;

use cosmwasm_std::Uint128;
use dashboard_setup::*;
use truefund_dapp::dispatcher::Action;
use truefund_dapp::form::FormField;
use truefund_dapp::gate::WalletStatus;

fn register(setup: &mut DashboardSetup, recipient: &str, org_name: &str) -> String {
    let dashboard = &mut setup.dashboard;
    dashboard.input(FormField::RecipientAddress, recipient);
    dashboard.input(FormField::OrgName, org_name);
    dashboard.click(Action::RegisterRecipient).unwrap().to_string()
}

fn add_feed(setup: &mut DashboardSetup, currency: &str) -> String {
    let feed = setup.feed_addr.to_string();
    let dashboard = &mut setup.dashboard;
    dashboard.input(FormField::FeedCurrency, currency);
    dashboard.input(FormField::FeedAddress, feed);
    dashboard.toggle_eth_per_local(true);
    dashboard.click(Action::AddPriceFeed).unwrap().to_string()
}

fn donate(setup: &mut DashboardSetup, recipient: &str, currency: &str, amount: &str) -> String {
    let dashboard = &mut setup.dashboard;
    dashboard.input(FormField::RecipientAddress, recipient);
    dashboard.input(FormField::CurrencyCode, currency);
    dashboard.input(FormField::DonationAmount, amount);
    dashboard.click(Action::Donate).unwrap().to_string()
}

#[test]
fn full_donation_flow() {
    let mut setup = DashboardSetup::new(DEPLOYER, USD_PRICE);
    assert_eq!(setup.dashboard.gate().wallet.status, WalletStatus::Disconnected);

    setup.dashboard.connect();
    assert!(setup.dashboard.gate().actions_enabled());

    assert_eq!(add_feed(&mut setup, "USD"), "Price feed added!");
    assert_eq!(register(&mut setup, RECIPIENT, "Red Cross"), "Recipient registered!");

    // both lookups see the new entries
    setup.dashboard.input(FormField::CheckRecipientAddress, RECIPIENT);
    let status = setup.dashboard.click(Action::QueryRecipient).unwrap();
    assert_eq!(status.to_string(), "Registered: Red Cross");

    setup.dashboard.input(FormField::CheckCurrencyCode, "USD");
    let status = setup.dashboard.click(Action::QueryPriceFeed).unwrap();
    assert_eq!(
        status.to_string(),
        format!("Price feed set: {}", setup.feed_addr)
    );

    // 100 USD at 0.002 ETH each
    assert_eq!(
        donate(&mut setup, RECIPIENT, "USD", "100"),
        "Donation sent! (0.2 ETH)"
    );

    let raised = setup.wallet().balance(setup.truefund_addr.as_str());
    assert_eq!(raised, Uint128::new(200_000_000_000_000_000));
    assert_eq!(
        setup.wallet().balance(DEPLOYER),
        Uint128::new(INITIAL_BALANCE - 200_000_000_000_000_000)
    );
    assert_eq!(setup.wallet().signatures, 3);

    let page = setup.dashboard.render();
    assert!(page.contains("Org Name: Red Cross"));
    assert!(page.contains("Status: Donation sent! (0.2 ETH)"));
}

#[test]
fn only_admin_manages_registry() {
    let mut setup = DashboardSetup::new(STRANGER, USD_PRICE);
    setup.dashboard.connect();

    let status = register(&mut setup, RECIPIENT, "Red Cross");
    assert!(status.starts_with("Error: Execution reverted:"));
    assert!(status.contains("Unauthorized"));

    let status = add_feed(&mut setup, "USD");
    assert!(status.contains("Unauthorized"));

    // nothing was written
    setup.dashboard.input(FormField::CheckRecipientAddress, RECIPIENT);
    let status = setup.dashboard.click(Action::QueryRecipient).unwrap();
    assert_eq!(status.to_string(), "Not registered");
}

#[test]
fn donation_without_price_feed() {
    let mut setup = DashboardSetup::new(DEPLOYER, USD_PRICE);
    setup.dashboard.connect();
    register(&mut setup, RECIPIENT, "Red Cross");

    let status = donate(&mut setup, RECIPIENT, "EUR", "10");
    assert_eq!(status, "Error: Invalid price feed value");

    // only the registration was signed
    assert_eq!(setup.wallet().signatures, 1);
    assert_eq!(setup.wallet().balance(setup.truefund_addr.as_str()), Uint128::zero());
}

#[test]
fn donation_to_unregistered_recipient_reverts() {
    let mut setup = DashboardSetup::new(DEPLOYER, USD_PRICE);
    setup.dashboard.connect();
    add_feed(&mut setup, "USD");

    let status = donate(&mut setup, RECIPIENT, "USD", "100");
    assert!(status.starts_with("Error: Execution reverted:"));
    assert!(status.contains("Recipient not registered"));

    // funds stay with the donor
    assert_eq!(setup.wallet().balance(DEPLOYER), Uint128::new(INITIAL_BALANCE));
}

#[test]
fn zero_oracle_answer_blocks_donation() {
    let mut setup = DashboardSetup::new(DEPLOYER, 0);
    setup.dashboard.connect();
    add_feed(&mut setup, "USD");
    register(&mut setup, RECIPIENT, "Red Cross");

    let status = donate(&mut setup, RECIPIENT, "USD", "100");
    assert_eq!(status, "Error: Invalid price feed value");
    assert_eq!(setup.wallet().signatures, 2);
}

#[test]
fn negative_oracle_answer_blocks_donation() {
    let mut setup = DashboardSetup::new(DEPLOYER, -5);
    setup.dashboard.connect();
    add_feed(&mut setup, "USD");
    register(&mut setup, RECIPIENT, "Red Cross");

    let status = donate(&mut setup, RECIPIENT, "USD", "1");
    assert_eq!(status, "Error: Invalid price feed value");
}

#[test]
fn removals_clear_lookups() {
    let mut setup = DashboardSetup::new(DEPLOYER, USD_PRICE);
    setup.dashboard.connect();
    add_feed(&mut setup, "USD");
    register(&mut setup, RECIPIENT, "Red Cross");

    // remove reuses the register form
    let status = setup.dashboard.click(Action::RemoveRecipient).unwrap();
    assert_eq!(status.to_string(), "Recipient removed!");

    let status = setup.dashboard.click(Action::RemovePriceFeed).unwrap();
    assert_eq!(status.to_string(), "Price feed removed!");

    setup.dashboard.input(FormField::CheckRecipientAddress, RECIPIENT);
    let status = setup.dashboard.click(Action::QueryRecipient).unwrap();
    assert_eq!(status.to_string(), "Not registered");

    setup.dashboard.input(FormField::CheckCurrencyCode, "USD");
    let status = setup.dashboard.click(Action::QueryPriceFeed).unwrap();
    assert_eq!(status.to_string(), "No price feed set");

    assert_eq!(setup.dashboard.lookups().recipient_org_name, None);
    assert_eq!(setup.dashboard.lookups().price_feed_address, None);

    // removing twice reverts
    let status = setup.dashboard.click(Action::RemoveRecipient).unwrap();
    assert!(status.to_string().contains("Recipient not registered"));
}

#[test]
fn disconnect_locks_actions() {
    let mut setup = DashboardSetup::new(DEPLOYER, USD_PRICE);
    setup.dashboard.connect();
    setup.dashboard.disconnect();

    assert!(setup.dashboard.click(Action::QueryRecipient).is_err());
    let page = setup.dashboard.render();
    assert!(page.contains("Connect your wallet to use the contract actions."));
    assert!(page.contains(&format!("Contract address: {}", setup.truefund_addr)));
}
