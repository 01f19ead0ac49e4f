use client::{
    scenario::Scenario,
    seed_default,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let scenario = Scenario::default_scenario();
    let ledger = scenario.build_ledger()?;

    let seeded = seed_default(
        &ledger.resolver(),
        &scenario.accounts,
        &scenario.market_addresses(),
    )
    .await?;

    for metrics in seeded.iter() {
        println!(
            "Metrics record: {}",
            metrics
                .authenticate_receipt
                .metrics
                .as_ref()
                .map_or_else(|| "none".to_string(), ToString::to_string)
        );
    }

    Ok(())
}
