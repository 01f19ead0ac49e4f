use anyhow::Context;
use metrics_interface::{
    contracts::{
        DUMMY_DEV_CONTRACT,
        MARKET_CONTRACT,
    },
    Address,
    ArtifactResolver,
    LedgerError,
};

use super::{
    Ledger,
    LedgerCall,
    SimMarket,
    SimToken,
};

/// Resolves `DummyDEV` and `Market` artifacts against a [`Ledger`].
#[derive(Clone, Debug)]
pub struct SimResolver {
    ledger: Ledger,
}

impl SimResolver {
    pub fn new(ledger: Ledger) -> Self {
        Self { ledger }
    }
}

impl ArtifactResolver for SimResolver {
    type Token = SimToken;
    type Market = SimMarket;

    async fn resolve_token(&self, contract_name: &str) -> anyhow::Result<SimToken> {
        let token_address = {
            let mut state = self.ledger.state_mut()?;
            state.journal.push(LedgerCall::ResolveToken {
                contract_name: contract_name.to_string(),
            });
            state.token_address.clone()
        };

        if contract_name != DUMMY_DEV_CONTRACT {
            return Err(LedgerError::UnknownArtifact)
                .with_context(|| format!("Resolving token artifact `{contract_name}`"));
        }

        Ok(SimToken::new(self.ledger.clone(), token_address))
    }

    async fn resolve_market_at(
        &self,
        contract_name: &str,
        address: &Address,
    ) -> anyhow::Result<SimMarket> {
        let deployed = {
            let mut state = self.ledger.state_mut()?;
            state.journal.push(LedgerCall::ResolveMarket {
                contract_name: contract_name.to_string(),
                address: address.clone(),
            });
            state.markets.contains_key(address)
        };

        if contract_name != MARKET_CONTRACT {
            return Err(LedgerError::UnknownArtifact)
                .with_context(|| format!("Resolving market artifact `{contract_name}`"));
        }
        if !deployed {
            return Err(LedgerError::ArtifactNotDeployed)
                .with_context(|| format!("Resolving `{contract_name}` at {address}"));
        }

        Ok(SimMarket::new(self.ledger.clone(), address.clone()))
    }
}
