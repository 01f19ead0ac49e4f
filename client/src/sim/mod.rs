//! An in-process ledger with a `DummyDEV` token and any number of `Market` contracts.
//!
//! All handles handed out by [`Ledger::resolver`] share one state, so balances and allowances
//! written through one handle are visible through every other. Every call made through a handle
//! is appended to the [`Ledger::journal`], including calls that revert.

mod market;
mod resolver;
mod token;

use std::{
    cell::{
        Ref,
        RefCell,
        RefMut,
    },
    collections::HashMap,
    rc::Rc,
};

use anyhow::Context;
pub use market::SimMarket;
use metrics_interface::{
    error::LedgerResult,
    Address,
    Amount,
    LedgerError,
};
pub use resolver::SimResolver;
pub use token::SimToken;

/// Prefix of derived metrics addresses; hex for `METR`.
const METRICS_ADDRESS_PREFIX: &str = "4d455452";

/// A contract call observed by the ledger, in submission order.
#[derive(Clone, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum LedgerCall {
    ResolveToken {
        contract_name: String,
    },
    ResolveMarket {
        contract_name: String,
        address: Address,
    },
    BalanceOf {
        owner: Address,
        balance: Amount,
    },
    Approve {
        owner: Address,
        spender: Address,
        amount: Amount,
    },
    Authenticate {
        market: Address,
        from: Address,
        property: Address,
        args: [String; 5],
    },
}

impl LedgerCall {
    /// A one-line description of the call's arguments.
    pub fn details(&self) -> String {
        match self {
            Self::ResolveToken { contract_name } => contract_name.clone(),
            Self::ResolveMarket {
                contract_name,
                address,
            } => format!("{contract_name} at {address}"),
            Self::BalanceOf { owner, balance } => format!("{owner} holds {balance}"),
            Self::Approve {
                owner,
                spender,
                amount,
            } => format!("{owner} allows {spender} to spend {amount}"),
            Self::Authenticate {
                market,
                from,
                property,
                args,
            } => format!(
                "{from} authenticates {property} on {market} with [{}]",
                args.join(", ")
            ),
        }
    }
}

/// A successful authentication recorded by a market.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Authentication {
    pub from: Address,
    pub property: Address,
    pub args: [String; 5],
    pub metrics: Address,
}

#[derive(Debug, Default)]
pub(crate) struct MarketState {
    pub(crate) authentication_fee: Amount,
    pub(crate) authentications: Vec<Authentication>,
}

#[derive(Debug)]
pub(crate) struct LedgerState {
    pub(crate) token_address: Address,
    pub(crate) balances: HashMap<Address, Amount>,
    /// Keyed by `(owner, spender)`.
    pub(crate) allowances: HashMap<(Address, Address), Amount>,
    pub(crate) markets: HashMap<Address, MarketState>,
    /// Property address to author.
    pub(crate) properties: HashMap<Address, Address>,
    pub(crate) journal: Vec<LedgerCall>,
    nonce: u64,
}

impl LedgerState {
    pub(crate) fn balance_of(&self, owner: &Address) -> Amount {
        self.balances.get(owner).copied().unwrap_or_default()
    }

    pub(crate) fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.allowances
            .get(&(owner.clone(), spender.clone()))
            .copied()
            .unwrap_or_default()
    }

    /// Bumps the nonce and returns the hash of the transaction it identifies.
    pub(crate) fn next_tx_hash(&mut self) -> String {
        self.nonce += 1;
        format!("0x{:064x}", self.nonce)
    }

    /// The address of the metrics record created by the current transaction.
    pub(crate) fn metrics_address(&self) -> anyhow::Result<Address> {
        Ok(Address::new(format!(
            "0x{METRICS_ADDRESS_PREFIX}{:032x}",
            self.nonce
        ))?)
    }

    /// Moves `amount` from `owner` to `spender` against `spender`'s allowance over `owner`.
    pub(crate) fn transfer_from(
        &mut self,
        spender: &Address,
        owner: &Address,
        amount: Amount,
    ) -> LedgerResult<()> {
        let allowance = self.allowance(owner, spender);
        if allowance < amount {
            return Err(LedgerError::InsufficientAllowance);
        }
        let owner_balance = self.balance_of(owner);
        if owner_balance < amount {
            return Err(LedgerError::InsufficientBalance);
        }
        let spender_balance = self
            .balance_of(spender)
            .checked_add(amount)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        self.allowances
            .insert((owner.clone(), spender.clone()), allowance - amount);
        self.balances.insert(owner.clone(), owner_balance - amount);
        self.balances.insert(spender.clone(), spender_balance);
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct Ledger {
    state: Rc<RefCell<LedgerState>>,
}

impl Ledger {
    /// Creates a ledger with the `DummyDEV` token deployed at `token_address`.
    pub fn new(token_address: Address) -> Self {
        let state = LedgerState {
            token_address,
            balances: HashMap::new(),
            allowances: HashMap::new(),
            markets: HashMap::new(),
            properties: HashMap::new(),
            journal: Vec::new(),
            nonce: 0,
        };
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    pub(crate) fn state(&self) -> anyhow::Result<Ref<'_, LedgerState>> {
        self.state
            .try_borrow()
            .context("Ledger state is already mutably borrowed")
    }

    pub(crate) fn state_mut(&self) -> anyhow::Result<RefMut<'_, LedgerState>> {
        self.state
            .try_borrow_mut()
            .context("Ledger state is already borrowed")
    }

    pub fn resolver(&self) -> SimResolver {
        SimResolver::new(self.clone())
    }

    pub fn token_address(&self) -> anyhow::Result<Address> {
        Ok(self.state()?.token_address.clone())
    }

    /// Credits `amount` `DummyDEV` to `owner`.
    pub fn mint(&self, owner: &Address, amount: Amount) -> anyhow::Result<()> {
        let mut state = self.state_mut()?;
        let balance = state
            .balance_of(owner)
            .checked_add(amount)
            .ok_or(LedgerError::ArithmeticOverflow)
            .with_context(|| format!("Minting {amount} to {owner}"))?;
        state.balances.insert(owner.clone(), balance);
        Ok(())
    }

    /// Deploys a market at `address` that pulls `authentication_fee` from every authenticator.
    pub fn deploy_market(
        &self,
        address: Address,
        authentication_fee: Amount,
    ) -> anyhow::Result<()> {
        let mut state = self.state_mut()?;
        if state.markets.contains_key(&address) || state.token_address == address {
            return Err(LedgerError::AddressInUse).with_context(|| format!("Deploying {address}"));
        }
        state.markets.insert(
            address,
            MarketState {
                authentication_fee,
                authentications: Vec::new(),
            },
        );
        Ok(())
    }

    /// Records `author` as the only account allowed to authenticate `property`.
    pub fn register_property(&self, property: Address, author: Address) -> anyhow::Result<()> {
        self.state_mut()?.properties.insert(property, author);
        Ok(())
    }

    pub fn balance_of(&self, owner: &Address) -> anyhow::Result<Amount> {
        Ok(self.state()?.balance_of(owner))
    }

    pub fn allowance(&self, owner: &Address, spender: &Address) -> anyhow::Result<Amount> {
        Ok(self.state()?.allowance(owner, spender))
    }

    pub fn authentications(&self, market: &Address) -> anyhow::Result<Vec<Authentication>> {
        let state = self.state()?;
        let market_state = state
            .markets
            .get(market)
            .ok_or(LedgerError::ArtifactNotDeployed)
            .with_context(|| format!("No market at {market}"))?;
        Ok(market_state.authentications.clone())
    }

    pub fn journal(&self) -> anyhow::Result<Vec<LedgerCall>> {
        Ok(self.state()?.journal.clone())
    }
}
