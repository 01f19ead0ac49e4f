use metrics_interface::{
    Address,
    Amount,
    TokenContract,
    TransactionReceipt,
    TxOptions,
};

use super::{
    Ledger,
    LedgerCall,
};

/// A handle to the ledger's `DummyDEV` token.
#[derive(Clone, Debug)]
pub struct SimToken {
    ledger: Ledger,
    address: Address,
}

impl SimToken {
    pub(crate) fn new(ledger: Ledger, address: Address) -> Self {
        Self { ledger, address }
    }
}

impl TokenContract for SimToken {
    fn address(&self) -> &Address {
        &self.address
    }

    async fn balance_of(&self, owner: &Address) -> anyhow::Result<Amount> {
        let mut state = self.ledger.state_mut()?;
        let balance = state.balance_of(owner);
        state.journal.push(LedgerCall::BalanceOf {
            owner: owner.clone(),
            balance,
        });
        Ok(balance)
    }

    async fn approve(
        &self,
        spender: &Address,
        amount: Amount,
        options: TxOptions,
    ) -> anyhow::Result<TransactionReceipt> {
        let mut state = self.ledger.state_mut()?;
        state.journal.push(LedgerCall::Approve {
            owner: options.from.clone(),
            spender: spender.clone(),
            amount,
        });

        state
            .allowances
            .insert((options.from.clone(), spender.clone()), amount);

        Ok(TransactionReceipt {
            tx_hash: state.next_tx_hash(),
            from: options.from,
            to: self.address.clone(),
            metrics: None,
        })
    }
}
