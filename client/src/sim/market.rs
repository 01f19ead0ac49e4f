use anyhow::Context;
use metrics_interface::{
    Address,
    LedgerError,
    MarketContract,
    TransactionReceipt,
    TxOptions,
};

use super::{
    Authentication,
    Ledger,
    LedgerCall,
};

/// A handle to one `Market` deployed on the ledger.
#[derive(Clone, Debug)]
pub struct SimMarket {
    ledger: Ledger,
    address: Address,
}

impl SimMarket {
    pub(crate) fn new(ledger: Ledger, address: Address) -> Self {
        Self { ledger, address }
    }
}

impl MarketContract for SimMarket {
    fn address(&self) -> &Address {
        &self.address
    }

    /// Authenticates `property` on this market, creating a metrics record.
    ///
    /// Only the property's author may authenticate it. A non-zero authentication fee is pulled
    /// from the sender through the `DummyDEV` allowance it granted this market.
    async fn authenticate(
        &self,
        property: &Address,
        args: &[String; 5],
        options: TxOptions,
    ) -> anyhow::Result<TransactionReceipt> {
        let mut state = self.ledger.state_mut()?;
        state.journal.push(LedgerCall::Authenticate {
            market: self.address.clone(),
            from: options.from.clone(),
            property: property.clone(),
            args: args.clone(),
        });

        if state.properties.get(property) != Some(&options.from) {
            return Err(LedgerError::NotPropertyAuthor).with_context(|| {
                format!("{} can't authenticate property {property}", options.from)
            });
        }

        let fee = state
            .markets
            .get(&self.address)
            .map(|market| market.authentication_fee)
            .ok_or(LedgerError::ArtifactNotDeployed)
            .with_context(|| format!("Market {} disappeared", self.address))?;
        if fee > 0 {
            state
                .transfer_from(&self.address, &options.from, fee)
                .with_context(|| format!("Paying the authentication fee of {fee} for {property}"))?;
        }

        let tx_hash = state.next_tx_hash();
        let metrics = state.metrics_address()?;
        if let Some(market) = state.markets.get_mut(&self.address) {
            market.authentications.push(Authentication {
                from: options.from.clone(),
                property: property.clone(),
                args: args.clone(),
                metrics: metrics.clone(),
            });
        }

        Ok(TransactionReceipt {
            tx_hash,
            from: options.from,
            to: self.address.clone(),
            metrics: Some(metrics),
        })
    }
}
