use client::{
    scenario::Scenario,
    seed_default,
    sim::LedgerCall,
};
use metrics_interface::{
    address,
    Address,
    Amount,
};

const SCENARIO: &str = r#"{
    "token": "0xD0",
    "accounts": [
        {"account": "0xA0", "property": "0xP0"},
        {"account": "0xA1", "property": "0xP1"},
        {"account": "0xA2"},
        {"account": "0xA3", "property": "0xP3"},
        {"account": "0xA4"},
        {"account": "0xA5", "property": "0xP5"}
    ],
    "markets": [{"address": "0xM0"}, {"address": "0xM1"}],
    "balances": {"0xA0": 100, "0xA1": 200, "0xA3": 300, "0xA5": 500}
}"#;

fn placeholder_args() -> [String; 5] {
    ["arg1", "arg2", "arg3", "arg4", "arg5"].map(String::from)
}

fn expected_pair_calls(
    account: Address,
    market: Address,
    property: Address,
    balance: Amount,
) -> [LedgerCall; 4] {
    [
        LedgerCall::ResolveMarket {
            contract_name: "Market".to_string(),
            address: market.clone(),
        },
        LedgerCall::BalanceOf {
            owner: account.clone(),
            balance,
        },
        LedgerCall::Approve {
            owner: account.clone(),
            spender: market.clone(),
            amount: balance,
        },
        LedgerCall::Authenticate {
            market,
            from: account,
            property,
            args: placeholder_args(),
        },
    ]
}

#[tokio::test]
async fn legacy_plan_call_sequence() -> anyhow::Result<()> {
    let scenario = Scenario::from_json(SCENARIO)?;
    let ledger = scenario.build_ledger()?;

    let seeded = seed_default(
        &ledger.resolver(),
        &scenario.accounts,
        &scenario.market_addresses(),
    )
    .await?;

    let mut expected = vec![LedgerCall::ResolveToken {
        contract_name: "DummyDEV".to_string(),
    }];
    for (account, market, property, balance) in [
        (address!("0xA0"), address!("0xM0"), address!("0xP0"), 100),
        (address!("0xA3"), address!("0xM0"), address!("0xP3"), 300),
        (address!("0xA5"), address!("0xM0"), address!("0xP5"), 500),
        (address!("0xA1"), address!("0xM1"), address!("0xP1"), 200),
        (address!("0xA5"), address!("0xM1"), address!("0xP5"), 500),
    ] {
        expected.extend(expected_pair_calls(account, market, property, balance));
    }
    assert_eq!(ledger.journal()?, expected);

    let lines: Vec<String> = seeded.iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        [
            "metrics:  market:0xM0,property:0xP0",
            "metrics:  market:0xM0,property:0xP3",
            "metrics:  market:0xM0,property:0xP5",
            "metrics:  market:0xM1,property:0xP1",
            "metrics:  market:0xM1,property:0xP5",
        ]
    );

    Ok(())
}

#[tokio::test]
async fn authentications_land_on_each_market() -> anyhow::Result<()> {
    let scenario = Scenario::from_json(SCENARIO)?;
    let ledger = scenario.build_ledger()?;

    let seeded = seed_default(
        &ledger.resolver(),
        &scenario.accounts,
        &scenario.market_addresses(),
    )
    .await?;

    let market_0 = ledger.authentications(&address!("0xM0"))?;
    let market_1 = ledger.authentications(&address!("0xM1"))?;
    assert_eq!(
        market_0.iter().map(|a| a.property.as_str()).collect::<Vec<_>>(),
        ["0xP0", "0xP3", "0xP5"]
    );
    assert_eq!(
        market_1.iter().map(|a| a.property.as_str()).collect::<Vec<_>>(),
        ["0xP1", "0xP5"]
    );
    assert!(market_0
        .iter()
        .chain(market_1.iter())
        .all(|a| a.args == placeholder_args()));

    // Every receipt carries the metrics record the market stored.
    let stored: Vec<Address> = market_0
        .iter()
        .chain(market_1.iter())
        .map(|a| a.metrics.clone())
        .collect();
    for metrics in seeded.iter() {
        let created = metrics
            .authenticate_receipt
            .metrics
            .as_ref()
            .expect("Authenticate should create a metrics record");
        assert!(stored.contains(created));
        assert_eq!(metrics.authenticate_receipt.to, metrics.market);
        assert_eq!(metrics.approve_receipt.to, address!("0xD0"));
    }

    // Nothing was spent, so every allowance equals the full balance.
    for (account, market) in [("0xA0", "0xM0"), ("0xA5", "0xM0"), ("0xA5", "0xM1")] {
        let account: Address = account.parse()?;
        let market: Address = market.parse()?;
        assert_eq!(
            ledger.allowance(&account, &market)?,
            ledger.balance_of(&account)?
        );
    }
    Ok(())
}

#[tokio::test]
async fn default_scenario_seeds_five_metrics() -> anyhow::Result<()> {
    let scenario = Scenario::default_scenario();
    let ledger = scenario.build_ledger()?;

    let seeded = seed_default(
        &ledger.resolver(),
        &scenario.accounts,
        &scenario.market_addresses(),
    )
    .await?;
    assert_eq!(seeded.len(), 5);

    let journal = ledger.journal()?;
    let count = |f: fn(&LedgerCall) -> bool| journal.iter().filter(|call| f(call)).count();
    assert_eq!(count(|c| matches!(c, LedgerCall::ResolveToken { .. })), 1);
    // Market handles are never reused, even for a repeated market address.
    assert_eq!(count(|c| matches!(c, LedgerCall::ResolveMarket { .. })), 5);
    assert_eq!(count(|c| matches!(c, LedgerCall::Approve { .. })), 5);
    assert_eq!(count(|c| matches!(c, LedgerCall::Authenticate { .. })), 5);

    // Transaction hashes are unique across the run.
    let mut hashes: Vec<&str> = seeded
        .iter()
        .flat_map(|m| [&m.approve_receipt.tx_hash, &m.authenticate_receipt.tx_hash])
        .map(String::as_str)
        .collect();
    hashes.sort_unstable();
    hashes.dedup();
    assert_eq!(hashes.len(), 10);
    Ok(())
}
