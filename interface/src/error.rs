/// Reverts and lookup failures raised by the ledger layer behind the contract traits.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LedgerError {
    UnknownArtifact,
    ArtifactNotDeployed,
    AddressInUse,
    InsufficientBalance,
    InsufficientAllowance,
    NotPropertyAuthor,
    ArithmeticOverflow,
}

impl From<LedgerError> for &'static str {
    fn from(value: LedgerError) -> Self {
        match value {
            LedgerError::UnknownArtifact => "No artifact is registered under that contract name",
            LedgerError::ArtifactNotDeployed => "No contract of that type is deployed at the address",
            LedgerError::AddressInUse => "A contract is already deployed at the address",
            LedgerError::InsufficientBalance => "Token balance is too low",
            LedgerError::InsufficientAllowance => "Token allowance is too low",
            LedgerError::NotPropertyAuthor => "Sender is not the author of the property",
            LedgerError::ArithmeticOverflow => "Token amount overflowed",
        }
    }
}

impl core::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg: &'static str = (*self).into();
        write!(f, "{:?}: {msg}", self)
    }
}

impl std::error::Error for LedgerError {}

pub type LedgerResult<T> = Result<T, LedgerError>;
