//! Capability traits for the deployed contracts the seeder talks to.
//!
//! Implementations decide how a contract name and address map to a live deployment; the seeder
//! only relies on the calls below.

use crate::address::Address;

/// Artifact name of the shared token contract.
pub const DUMMY_DEV_CONTRACT: &str = "DummyDEV";

/// Artifact name of a market contract.
pub const MARKET_CONTRACT: &str = "Market";

/// Token amounts, wide enough for 18-decimal balances.
pub type Amount = u128;

/// Sender options for state-changing calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxOptions {
    pub from: Address,
}

impl TxOptions {
    pub fn from(from: &Address) -> Self {
        Self { from: from.clone() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionReceipt {
    pub tx_hash: String,
    pub from: Address,
    pub to: Address,
    /// Address of the metrics record created by a successful `authenticate`.
    pub metrics: Option<Address>,
}

pub trait TokenContract {
    fn address(&self) -> &Address;

    async fn balance_of(&self, owner: &Address) -> anyhow::Result<Amount>;

    /// Sets the allowance of `spender` over the sender's tokens to `amount`.
    async fn approve(
        &self,
        spender: &Address,
        amount: Amount,
        options: TxOptions,
    ) -> anyhow::Result<TransactionReceipt>;
}

pub trait MarketContract {
    fn address(&self) -> &Address;

    async fn authenticate(
        &self,
        property: &Address,
        args: &[String; 5],
        options: TxOptions,
    ) -> anyhow::Result<TransactionReceipt>;
}

/// Maps contract artifact names to callable handles.
pub trait ArtifactResolver {
    type Token: TokenContract;
    type Market: MarketContract;

    /// Resolves the canonical deployment of the token artifact `contract_name`.
    async fn resolve_token(&self, contract_name: &str) -> anyhow::Result<Self::Token>;

    /// Resolves the market artifact `contract_name` deployed at `address`.
    async fn resolve_market_at(
        &self,
        contract_name: &str,
        address: &Address,
    ) -> anyhow::Result<Self::Market>;
}
