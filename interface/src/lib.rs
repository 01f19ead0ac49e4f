//! Shared types and contract capabilities for seeding market metrics.

pub mod account;
pub mod address;
pub mod contracts;
pub mod error;

pub use account::AccountInfo;
pub use address::Address;
pub use contracts::{
    Amount,
    ArtifactResolver,
    MarketContract,
    TokenContract,
    TransactionReceipt,
    TxOptions,
};
pub use error::LedgerError;
