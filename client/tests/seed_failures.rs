use client::{
    scenario::Scenario,
    seed,
    seed_default,
    sim::LedgerCall,
    MetricsPair,
    SeedError,
};
use metrics_interface::{
    address,
    LedgerError,
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

#[tokio::test]
async fn missing_property_stops_at_the_third_pair() -> anyhow::Result<()> {
    let mut scenario = Scenario::from_json(SCENARIO)?;
    let ledger = scenario.build_ledger()?;
    scenario.accounts[5].property = None;

    let err = seed_default(
        &ledger.resolver(),
        &scenario.accounts,
        &scenario.market_addresses(),
    )
    .await
    .unwrap_err();

    assert_eq!(
        err.downcast_ref::<SeedError>(),
        Some(&SeedError::MissingProperty {
            index: 5,
            account: address!("0xA5"),
        })
    );

    // The token resolution plus two complete pairs, and nothing for account 5.
    let journal = ledger.journal()?;
    assert_eq!(journal.len(), 1 + 2 * 4);
    assert!(matches!(
        journal.last(),
        Some(LedgerCall::Authenticate { property, .. }) if *property == address!("0xP3")
    ));
    assert_eq!(ledger.authentications(&address!("0xM0"))?.len(), 2);
    assert!(ledger.authentications(&address!("0xM1"))?.is_empty());
    Ok(())
}

#[tokio::test]
async fn unresolvable_market_aborts_the_run() -> anyhow::Result<()> {
    let scenario = Scenario::from_json(SCENARIO)?;
    let ledger = scenario.build_ledger()?;
    let market_addresses = [address!("0xM0"), address!("0xM9")];

    let err = seed_default(&ledger.resolver(), &scenario.accounts, &market_addresses)
        .await
        .unwrap_err();

    assert_eq!(
        err.downcast_ref::<LedgerError>(),
        Some(&LedgerError::ArtifactNotDeployed)
    );

    let journal = ledger.journal()?;
    assert_eq!(journal.len(), 1 + 3 * 4 + 1);
    assert_eq!(
        journal.last(),
        Some(&LedgerCall::ResolveMarket {
            contract_name: "Market".to_string(),
            address: address!("0xM9"),
        })
    );
    assert_eq!(ledger.authentications(&address!("0xM0"))?.len(), 3);
    Ok(())
}

#[tokio::test]
async fn out_of_range_indices_are_reported() -> anyhow::Result<()> {
    let scenario = Scenario::from_json(SCENARIO)?;
    let ledger = scenario.build_ledger()?;
    let resolver = ledger.resolver();
    let markets = scenario.market_addresses();

    let err = seed(
        &resolver,
        &scenario.accounts,
        &markets,
        &[MetricsPair::new(6, 0)],
    )
    .await
    .unwrap_err();
    assert_eq!(
        err.downcast_ref::<SeedError>(),
        Some(&SeedError::AccountIndexOutOfRange { index: 6, len: 6 })
    );

    let err = seed(
        &resolver,
        &scenario.accounts,
        &markets,
        &[MetricsPair::new(0, 2)],
    )
    .await
    .unwrap_err();
    assert_eq!(
        err.downcast_ref::<SeedError>(),
        Some(&SeedError::MarketIndexOutOfRange { index: 2, len: 2 })
    );

    // Only the two token resolutions reached the ledger.
    assert_eq!(ledger.journal()?.len(), 2);
    Ok(())
}

#[tokio::test]
async fn unknown_token_artifact_is_rejected() -> anyhow::Result<()> {
    use metrics_interface::ArtifactResolver;

    let scenario = Scenario::from_json(SCENARIO)?;
    let ledger = scenario.build_ledger()?;

    let err = ledger
        .resolver()
        .resolve_token("DummyDAI")
        .await
        .map(|_| ())
        .unwrap_err();
    assert_eq!(
        err.downcast_ref::<LedgerError>(),
        Some(&LedgerError::UnknownArtifact)
    );
    Ok(())
}

#[tokio::test]
async fn reverted_authenticate_keeps_the_approval() -> anyhow::Result<()> {
    let mut scenario = Scenario::from_json(SCENARIO)?;
    // Account 0 claims account 1's property, which it didn't author.
    scenario.accounts[0].property = Some(address!("0xP1"));
    let ledger = scenario.build_ledger()?;
    ledger.register_property(address!("0xP1"), address!("0xA1"))?;

    let err = seed_default(
        &ledger.resolver(),
        &scenario.accounts,
        &scenario.market_addresses(),
    )
    .await
    .unwrap_err();
    assert_eq!(
        err.downcast_ref::<LedgerError>(),
        Some(&LedgerError::NotPropertyAuthor)
    );

    // No rollback: the approve that preceded the revert stays on the ledger.
    assert_eq!(
        ledger.allowance(&address!("0xA0"), &address!("0xM0"))?,
        100
    );
    assert!(ledger.authentications(&address!("0xM0"))?.is_empty());
    assert_eq!(ledger.journal()?.len(), 5);
    Ok(())
}
