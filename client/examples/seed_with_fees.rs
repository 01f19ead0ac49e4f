use client::{
    scenario::Scenario,
    seed_default,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut scenario = Scenario::default_scenario();
    for market in scenario.markets.iter_mut() {
        market.authentication_fee = 1_000_000_000_000_000_000;
    }
    let ledger = scenario.build_ledger()?;

    let seeded = seed_default(
        &ledger.resolver(),
        &scenario.accounts,
        &scenario.market_addresses(),
    )
    .await?;

    // Accounts listed twice approve less the second time around.
    for metrics in seeded.iter() {
        println!("{} approved {}", metrics.account, metrics.approved);
    }

    for info in scenario.accounts.iter() {
        println!(
            "{} balance: {}",
            info.account,
            ledger.balance_of(&info.account)?
        );
    }

    Ok(())
}
