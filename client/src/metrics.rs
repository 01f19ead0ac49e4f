//! Seeds market metrics by authenticating pre-configured properties against deployed markets.
//!
//! For every planned (account, market) pair the seeder resolves the market, reads the account's
//! `DummyDEV` balance, approves the market to spend all of it, and then authenticates the
//! account's property on the market. Pairs run strictly one after another and the first failure
//! aborts the run; transactions that already landed stay on the ledger.

use std::{
    fmt::Display,
    str::FromStr,
};

use anyhow::Context;
use metrics_interface::{
    contracts::{
        DUMMY_DEV_CONTRACT,
        MARKET_CONTRACT,
    },
    AccountInfo,
    Address,
    Amount,
    ArtifactResolver,
    MarketContract,
    TokenContract,
    TransactionReceipt,
    TxOptions,
};
use serde::{
    Deserialize,
    Serialize,
};

pub const AUTH_ARG_COUNT: usize = 5;

/// The (account, market) index pairs of the default mock setup, in execution order.
pub const LEGACY_PAIRS: [(usize, usize); 5] = [(0, 0), (3, 0), (5, 0), (1, 1), (5, 1)];

/// The market-specific arguments passed to `authenticate` after the property address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthArgs([String; AUTH_ARG_COUNT]);

impl AuthArgs {
    pub fn new(args: [String; AUTH_ARG_COUNT]) -> Self {
        Self(args)
    }

    pub fn as_array(&self) -> &[String; AUTH_ARG_COUNT] {
        &self.0
    }
}

/// Placeholder arguments `arg1` through `arg5`.
impl Default for AuthArgs {
    fn default() -> Self {
        Self(std::array::from_fn(|i| format!("arg{}", i + 1)))
    }
}

impl TryFrom<Vec<String>> for AuthArgs {
    type Error = anyhow::Error;

    fn try_from(args: Vec<String>) -> Result<Self, Self::Error> {
        let len = args.len();
        let args: [String; AUTH_ARG_COUNT] = args.try_into().map_err(|_| {
            anyhow::anyhow!("Expected {AUTH_ARG_COUNT} authenticate arguments, got {len}")
        })?;
        Ok(Self(args))
    }
}

/// One planned seeding step: which account authenticates its property on which market.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MetricsPairRepr")]
pub struct MetricsPair {
    pub account_index: usize,
    pub market_index: usize,
    pub auth_args: AuthArgs,
}

/// Scenario files may spell a pair as `"3:0"` or as a full object.
#[derive(Deserialize)]
#[serde(untagged)]
enum MetricsPairRepr {
    Short(String),
    Full {
        account_index: usize,
        market_index: usize,
        #[serde(default)]
        auth_args: AuthArgs,
    },
}

impl TryFrom<MetricsPairRepr> for MetricsPair {
    type Error = anyhow::Error;

    fn try_from(repr: MetricsPairRepr) -> Result<Self, Self::Error> {
        match repr {
            MetricsPairRepr::Short(s) => s.parse(),
            MetricsPairRepr::Full {
                account_index,
                market_index,
                auth_args,
            } => Ok(Self {
                account_index,
                market_index,
                auth_args,
            }),
        }
    }
}

impl MetricsPair {
    pub fn new(account_index: usize, market_index: usize) -> Self {
        Self {
            account_index,
            market_index,
            auth_args: AuthArgs::default(),
        }
    }

    pub fn with_auth_args(mut self, auth_args: AuthArgs) -> Self {
        self.auth_args = auth_args;
        self
    }

    /// The fixed five-step plan of the default mock setup.
    pub fn legacy_plan() -> Vec<Self> {
        LEGACY_PAIRS
            .iter()
            .map(|&(account_index, market_index)| Self::new(account_index, market_index))
            .collect()
    }
}

impl FromStr for MetricsPair {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (account, market) = s
            .split_once(':')
            .with_context(|| format!("Pair `{s}` should look like `<account>:<market>`"))?;
        let account_index = account
            .trim()
            .parse()
            .with_context(|| format!("Invalid account index in pair `{s}`"))?;
        let market_index = market
            .trim()
            .parse()
            .with_context(|| format!("Invalid market index in pair `{s}`"))?;
        Ok(Self::new(account_index, market_index))
    }
}

impl Display for MetricsPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.account_index, self.market_index)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedError {
    AccountIndexOutOfRange { index: usize, len: usize },
    MarketIndexOutOfRange { index: usize, len: usize },
    MissingProperty { index: usize, account: Address },
}

impl Display for SeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AccountIndexOutOfRange { index, len } => {
                write!(f, "Account index {index} is out of range for {len} accounts")
            }
            Self::MarketIndexOutOfRange { index, len } => {
                write!(f, "Market index {index} is out of range for {len} markets")
            }
            Self::MissingProperty { index, account } => {
                write!(f, "Account {index} ({account}) has no property to authenticate")
            }
        }
    }
}

impl std::error::Error for SeedError {}

/// The outcome of one completed pair. Displays as the seeder's log line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeededMetrics {
    pub market: Address,
    pub property: Address,
    pub account: Address,
    pub approved: Amount,
    pub approve_receipt: TransactionReceipt,
    pub authenticate_receipt: TransactionReceipt,
}

impl Display for SeededMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "metrics:  market:{},property:{}", self.market, self.property)
    }
}

/// Runs [`seed`] with [`MetricsPair::legacy_plan`].
pub async fn seed_default<R: ArtifactResolver>(
    resolver: &R,
    accounts: &[AccountInfo],
    market_addresses: &[Address],
) -> anyhow::Result<Vec<SeededMetrics>> {
    seed(resolver, accounts, market_addresses, &MetricsPair::legacy_plan()).await
}

/// Seeds metrics for every pair in `pairs`, in order, printing one line per completed pair.
///
/// The `DummyDEV` token is resolved once up front; market handles are resolved per pair. Errors
/// from the resolver or a contract call are returned as-is and stop the run.
pub async fn seed<R: ArtifactResolver>(
    resolver: &R,
    accounts: &[AccountInfo],
    market_addresses: &[Address],
    pairs: &[MetricsPair],
) -> anyhow::Result<Vec<SeededMetrics>> {
    let dummy_dev = resolver.resolve_token(DUMMY_DEV_CONTRACT).await?;

    let mut seeded = Vec::with_capacity(pairs.len());
    for pair in pairs {
        let metrics = seed_pair(resolver, &dummy_dev, accounts, market_addresses, pair).await?;
        println!("{metrics}");
        seeded.push(metrics);
    }

    Ok(seeded)
}

async fn seed_pair<R: ArtifactResolver>(
    resolver: &R,
    dummy_dev: &R::Token,
    accounts: &[AccountInfo],
    market_addresses: &[Address],
    pair: &MetricsPair,
) -> anyhow::Result<SeededMetrics> {
    let info = accounts
        .get(pair.account_index)
        .ok_or(SeedError::AccountIndexOutOfRange {
            index: pair.account_index,
            len: accounts.len(),
        })?;
    let property = info.property.as_ref().ok_or_else(|| SeedError::MissingProperty {
        index: pair.account_index,
        account: info.account.clone(),
    })?;
    let market_address = market_addresses
        .get(pair.market_index)
        .ok_or(SeedError::MarketIndexOutOfRange {
            index: pair.market_index,
            len: market_addresses.len(),
        })?;

    let market = resolver
        .resolve_market_at(MARKET_CONTRACT, market_address)
        .await?;

    // Approve the entire balance as read right now, not a balance from an earlier pair.
    let balance = dummy_dev.balance_of(&info.account).await?;
    let approve_receipt = dummy_dev
        .approve(market.address(), balance, TxOptions::from(&info.account))
        .await?;

    let authenticate_receipt = market
        .authenticate(
            property,
            pair.auth_args.as_array(),
            TxOptions::from(&info.account),
        )
        .await?;

    Ok(SeededMetrics {
        market: market_address.clone(),
        property: property.clone(),
        account: info.account.clone(),
        approved: balance,
        approve_receipt,
        authenticate_receipt,
    })
}
