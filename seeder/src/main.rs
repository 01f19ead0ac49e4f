//! Runs the metrics seeder against an in-memory ledger built from a scenario file.

mod cli;

use clap::Parser;
use client::{
    logs::{
        log_divider,
        log_error,
        log_info,
        log_success,
        LogColor,
    },
    print_kv,
    scenario::Scenario,
    seed,
    sim::Ledger,
};
use colored::Colorize;
use itertools::Itertools;

use crate::cli::{
    Cli,
    Command,
    SeedArgs,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Seed(args) => run_seed(args).await,
        Command::Scenario => {
            println!(
                "{}",
                serde_json::to_string_pretty(&Scenario::default_scenario())?
            );
            Ok(())
        }
    }
}

async fn run_seed(args: SeedArgs) -> anyhow::Result<()> {
    let scenario = args.load_scenario()?;
    let plan = args.plan(&scenario)?;
    let ledger = scenario.build_ledger()?;

    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, false);
    print_kv!(format!("[{timestamp}]"), "Seeding metrics");
    log_info("DummyDEV", &scenario.token);
    log_info("Markets", scenario.market_addresses().iter().join(", "));
    log_info("Plan", plan.iter().join(", "));
    log_divider();

    let result = seed(
        &ledger.resolver(),
        &scenario.accounts,
        &scenario.market_addresses(),
        &plan,
    )
    .await;

    if !args.quiet {
        print_journal(&ledger)?;
    }

    match result {
        Ok(seeded) => {
            log_success("Seeded", format!("{} of {} pairs", seeded.len(), plan.len()));
            Ok(())
        }
        Err(e) => {
            log_error("Seeding failed", format!("{e:#}"));
            Err(e)
        }
    }
}

fn print_journal(ledger: &Ledger) -> anyhow::Result<()> {
    let journal = ledger.journal()?;

    log_divider();
    println!("{}", "Ledger journal".color(LogColor::Header));
    for (i, call) in journal.iter().enumerate() {
        log_info(format!("{i:>3} {call}"), call.details());
    }
    log_divider();

    Ok(())
}
