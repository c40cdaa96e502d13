//! [`Rate`]-related definitions.

use std::str::FromStr;

use derive_more::Display;
use rust_decimal::Decimal;

/// Signed adjustment rate, where `0.05` means a 5% uplift and `-0.1` means a
/// 10% discount.
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "Decimal", into = "Decimal")
)]
pub struct Rate(Decimal);

impl Rate {
    /// Creates a new [`Rate`] by checking the provided value is within the
    /// `[-1, 1]` range.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        if val < Decimal::NEGATIVE_ONE || val > Decimal::ONE {
            None
        } else {
            #[expect(
                clippy::allow_attributes,
                reason = "`expect` is not fulfilled on an `unsafe` block"
            )]
            #[allow(unsafe_code, reason = "invariants checked already")]
            Some(unsafe { Self::new_unchecked(val) })
        }
    }

    /// Creates a new [`Rate`] without performing any validation.
    ///
    /// # Safety
    ///
    /// The provided value must be within the `[-1, 1]` range.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub const unsafe fn new_unchecked(val: Decimal) -> Self {
        Self(val)
    }

    /// Returns the decimal value of this [`Rate`].
    #[must_use]
    pub const fn decimal(self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Rate {
    type Error = &'static str;

    fn try_from(val: Decimal) -> Result<Self, Self::Error> {
        Self::new(val).ok_or("`Rate` must be within `[-1, 1]` range")
    }
}

impl From<Rate> for Decimal {
    fn from(rate: Rate) -> Self {
        rate.0
    }
}

impl FromStr for Rate {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid rate value")
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::Rate;

    #[test]
    fn accepts_rates_within_range() {
        for s in ["0", "0.05", "-0.05", "-0.10", "1", "-1"] {
            let rate = Rate::from_str(s).unwrap();
            assert_eq!(rate.decimal(), s.parse::<Decimal>().unwrap(), "{s}");
        }
    }

    #[test]
    fn rejects_rates_out_of_range() {
        for s in ["1.01", "-1.5", "5", "abc", ""] {
            assert!(Rate::from_str(s).is_err(), "{s}");
        }
        assert!(Rate::new(Decimal::from(2)).is_none());
    }

    #[test]
    fn defaults_to_zero() {
        assert_eq!(Rate::default().decimal(), Decimal::ZERO);
    }
}
