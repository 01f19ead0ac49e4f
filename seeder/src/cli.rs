use std::path::PathBuf;

use clap::{
    Args,
    Parser,
    Subcommand,
};
use client::{
    scenario::Scenario,
    AuthArgs,
    MetricsPair,
};

#[derive(Parser, Debug)]
#[command(name = "metrics-seeder")]
#[command(about = "Seeds market metrics against an in-memory DummyDEV/Market ledger")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Approve and authenticate every planned (account, market) pair.
    Seed(SeedArgs),

    /// Print the built-in scenario as JSON, as a starting point for a scenario file.
    Scenario,
}

#[derive(Args, Debug)]
pub struct SeedArgs {
    /// Scenario JSON file. Uses the built-in scenario when omitted.
    #[arg(long, short)]
    pub scenario: Option<PathBuf>,

    /// Pairs to seed as `<account index>:<market index>`, overriding the scenario's plan.
    #[arg(long = "pair", value_name = "ACCOUNT:MARKET")]
    pub pairs: Vec<MetricsPair>,

    /// The five `authenticate` arguments used for every pair.
    #[arg(long = "auth-arg", value_name = "ARG")]
    pub auth_args: Vec<String>,

    /// Skip the ledger journal summary.
    #[arg(long, short)]
    pub quiet: bool,
}

impl SeedArgs {
    pub fn load_scenario(&self) -> anyhow::Result<Scenario> {
        match &self.scenario {
            Some(path) => Scenario::load(path),
            None => Ok(Scenario::default_scenario()),
        }
    }

    /// The scenario's plan, with the command line's pairs and arguments applied.
    pub fn plan(&self, scenario: &Scenario) -> anyhow::Result<Vec<MetricsPair>> {
        let plan = if self.pairs.is_empty() {
            scenario.plan()
        } else {
            self.pairs.clone()
        };

        if self.auth_args.is_empty() {
            return Ok(plan);
        }

        let auth_args = AuthArgs::try_from(self.auth_args.clone())?;
        Ok(plan
            .into_iter()
            .map(|pair| pair.with_auth_args(auth_args.clone()))
            .collect())
    }
}
