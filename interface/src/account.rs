use serde::{
    Deserialize,
    Serialize,
};

use crate::address::Address;

/// A pre-configured account and the property it authenticates, if it owns one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub account: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<Address>,
}

impl AccountInfo {
    pub fn new(account: Address, property: Option<Address>) -> Self {
        Self { account, property }
    }

    pub fn with_property(account: Address, property: Address) -> Self {
        Self::new(account, Some(property))
    }

    pub fn without_property(account: Address) -> Self {
        Self::new(account, None)
    }
}
