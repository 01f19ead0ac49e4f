use std::{
    fmt::Display,
    str::FromStr,
};

use serde::{
    Deserialize,
    Serialize,
};

/// An opaque, non-empty address on the external ledger, e.g. `0xA0` or a full hex account.
///
/// The ledger layer owns address formats, so no checksum or length validation happens here.
#[derive(
    Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EmptyAddressError;

impl Display for EmptyAddressError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Address can't be empty")
    }
}

impl std::error::Error for EmptyAddressError {}

impl Address {
    pub fn new(address: impl Into<String>) -> Result<Self, EmptyAddressError> {
        let address: String = address.into();
        if address.trim().is_empty() {
            return Err(EmptyAddressError);
        }
        Ok(Self(address))
    }

    /// Used by [`address!`](crate::address!), which checks the literal at compile time.
    #[doc(hidden)]
    pub fn from_literal(literal: &'static str) -> Self {
        Self(literal.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Builds an [`Address`] from a string literal, rejecting empty literals at compile time.
#[macro_export]
macro_rules! address {
    ($literal:literal) => {{
        const _: () = assert!(!$literal.is_empty(), "Address literal can't be empty");
        $crate::address::Address::from_literal($literal)
    }};
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Address {
    type Error = EmptyAddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Address {
    type Error = EmptyAddressError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Address {
    type Err = EmptyAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<Address> for String {
    fn from(value: Address) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_addresses() {
        assert_eq!(Address::new(""), Err(EmptyAddressError));
        assert_eq!(Address::new("   "), Err(EmptyAddressError));
        assert_eq!("".parse::<Address>(), Err(EmptyAddressError));
    }

    #[test]
    fn literal_macro_matches_parsed_address() -> anyhow::Result<()> {
        assert_eq!(crate::address!("0xP3"), "0xP3".parse::<Address>()?);
        Ok(())
    }

    #[test]
    fn displays_the_raw_string() -> anyhow::Result<()> {
        let address = Address::new("0xM0")?;
        assert_eq!(address.to_string(), "0xM0");
        assert_eq!(address.as_str(), "0xM0");
        Ok(())
    }

    #[test]
    fn serializes_transparently() -> anyhow::Result<()> {
        let address: Address = serde_json::from_str("\"0xA5\"")?;
        assert_eq!(address, Address::new("0xA5")?);
        assert_eq!(serde_json::to_string(&address)?, "\"0xA5\"");
        assert!(serde_json::from_str::<Address>("\"\"").is_err());
        Ok(())
    }
}
