//! Predefined deterministic addresses for local seeding runs and tests.

use metrics_interface::{
    address,
    AccountInfo,
    Address,
};

macro_rules! address_fn {
    ($fn_name:ident, $literal:literal) => {
        #[inline]
        pub fn $fn_name() -> &'static Address {
            static ADDRESS: ::std::sync::LazyLock<Address> =
                ::std::sync::LazyLock::new(|| address!($literal));

            ::std::sync::LazyLock::force(&ADDRESS)
        }
    };
}

#[rustfmt::skip]
mod unformatted {
    use super::*;

    address_fn!(dummy_dev, "0xD0D0D0D0D0D0D0D0D0D0D0D0D0D0D0D0D0D0D0D0");

    address_fn!(acc_0, "0xA0A0A0A0A0A0A0A0A0A0A0A0A0A0A0A0A0A0A0A0");
    address_fn!(acc_1, "0xA1A1A1A1A1A1A1A1A1A1A1A1A1A1A1A1A1A1A1A1");
    address_fn!(acc_2, "0xA2A2A2A2A2A2A2A2A2A2A2A2A2A2A2A2A2A2A2A2");
    address_fn!(acc_3, "0xA3A3A3A3A3A3A3A3A3A3A3A3A3A3A3A3A3A3A3A3");
    address_fn!(acc_4, "0xA4A4A4A4A4A4A4A4A4A4A4A4A4A4A4A4A4A4A4A4");
    address_fn!(acc_5, "0xA5A5A5A5A5A5A5A5A5A5A5A5A5A5A5A5A5A5A5A5");

    address_fn!(property_0, "0xB0B0B0B0B0B0B0B0B0B0B0B0B0B0B0B0B0B0B0B0");
    address_fn!(property_1, "0xB1B1B1B1B1B1B1B1B1B1B1B1B1B1B1B1B1B1B1B1");
    address_fn!(property_3, "0xB3B3B3B3B3B3B3B3B3B3B3B3B3B3B3B3B3B3B3B3");
    address_fn!(property_5, "0xB5B5B5B5B5B5B5B5B5B5B5B5B5B5B5B5B5B5B5B5");

    address_fn!(market_0, "0xE0E0E0E0E0E0E0E0E0E0E0E0E0E0E0E0E0E0E0E0");
    address_fn!(market_1, "0xE1E1E1E1E1E1E1E1E1E1E1E1E1E1E1E1E1E1E1E1");
}

pub use unformatted::*;

/// Six accounts; the four the default plan uses (0, 1, 3, 5) own a property.
pub fn default_accounts() -> Vec<AccountInfo> {
    vec![
        AccountInfo::with_property(acc_0().clone(), property_0().clone()),
        AccountInfo::with_property(acc_1().clone(), property_1().clone()),
        AccountInfo::without_property(acc_2().clone()),
        AccountInfo::with_property(acc_3().clone(), property_3().clone()),
        AccountInfo::without_property(acc_4().clone()),
        AccountInfo::with_property(acc_5().clone(), property_5().clone()),
    ]
}

pub fn default_markets() -> Vec<Address> {
    vec![market_0().clone(), market_1().clone()]
}
