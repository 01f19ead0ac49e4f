//! JSON scenario files describing a complete mock setup: token, markets, accounts, balances and
//! the seeding plan.

use std::{
    collections::BTreeMap,
    path::Path,
};

use anyhow::Context;
use metrics_interface::{
    AccountInfo,
    Address,
    Amount,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    metrics::MetricsPair,
    sim::Ledger,
    test_accounts,
};

/// Balance minted to each default account.
pub const DEFAULT_BALANCE: Amount = 10_000_000_000_000_000_000_000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketConfig {
    pub address: Address,
    /// `DummyDEV` pulled from the authenticator on every `authenticate`.
    #[serde(default)]
    pub authentication_fee: Amount,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub token: Address,
    pub accounts: Vec<AccountInfo>,
    pub markets: Vec<MarketConfig>,
    #[serde(default)]
    pub balances: BTreeMap<Address, Amount>,
    /// Falls back to [`MetricsPair::legacy_plan`] when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pairs: Option<Vec<MetricsPair>>,
}

impl Scenario {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Couldn't read scenario file {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid scenario file {}", path.display()))
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Couldn't parse scenario JSON")
    }

    /// The built-in setup: six accounts, two fee-less markets and [`DEFAULT_BALANCE`] for every
    /// account.
    pub fn default_scenario() -> Self {
        let accounts = test_accounts::default_accounts();
        let balances = accounts
            .iter()
            .map(|info| (info.account.clone(), DEFAULT_BALANCE))
            .collect();
        let markets = test_accounts::default_markets()
            .into_iter()
            .map(|address| MarketConfig {
                address,
                authentication_fee: 0,
            })
            .collect();

        Self {
            token: test_accounts::dummy_dev().clone(),
            accounts,
            markets,
            balances,
            pairs: None,
        }
    }

    pub fn market_addresses(&self) -> Vec<Address> {
        self.markets
            .iter()
            .map(|market| market.address.clone())
            .collect()
    }

    pub fn plan(&self) -> Vec<MetricsPair> {
        self.pairs.clone().unwrap_or_else(MetricsPair::legacy_plan)
    }

    /// Deploys the token and markets, mints the balances and registers each account as the author
    /// of its property.
    pub fn build_ledger(&self) -> anyhow::Result<Ledger> {
        let ledger = Ledger::new(self.token.clone());

        for market in self.markets.iter() {
            ledger.deploy_market(market.address.clone(), market.authentication_fee)?;
        }
        for (owner, amount) in self.balances.iter() {
            ledger.mint(owner, *amount)?;
        }
        for info in self.accounts.iter() {
            if let Some(property) = &info.property {
                ledger.register_property(property.clone(), info.account.clone())?;
            }
        }

        Ok(ledger)
    }
}
