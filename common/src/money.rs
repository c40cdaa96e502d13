//! [`Money`]-related definitions.

use std::{fmt, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy};

/// Amount of money in New Taiwan dollars.
///
/// Prices of a foreclosure case are all quoted in the same currency, so no
/// currency is carried along with the amount.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(transparent)
)]
pub struct Money(Decimal);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Prefix of the textual [`Money`] representation.
    const PREFIX: &'static str = "NT$";

    /// Creates a new [`Money`] amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Returns the decimal amount of this [`Money`].
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// Rounds this [`Money`] half-up to a whole currency unit.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0.normalize())
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = s.strip_prefix(Self::PREFIX).unwrap_or(s);
        if amount.is_empty() {
            return Err("empty amount");
        }
        Decimal::from_str(amount)
            .map(Self)
            .map_err(|_| "invalid amount")
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::Money;

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn from_str() {
        assert_eq!(
            Money::from_str("NT$1234.5").unwrap(),
            Money::new(decimal("1234.5")),
        );
        assert_eq!(
            Money::from_str("3000000").unwrap(),
            Money::new(decimal("3000000")),
        );

        assert!(Money::from_str("NT$").is_err());
        assert!(Money::from_str("").is_err());
        assert!(Money::from_str("US$12").is_err());
        assert!(Money::from_str("NT$12,000").is_err());
    }

    #[test]
    fn to_string() {
        assert_eq!(Money::new(decimal("33333")).to_string(), "NT$33333");
        assert_eq!(Money::new(decimal("33333.00")).to_string(), "NT$33333");
        assert_eq!(Money::new(decimal("120.50")).to_string(), "NT$120.5");
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(
            Money::new(decimal("33333.3333")).rounded(),
            Money::new(decimal("33333")),
        );
        assert_eq!(
            Money::new(decimal("2.5")).rounded(),
            Money::new(decimal("3")),
        );
        assert_eq!(
            Money::new(decimal("3.5")).rounded(),
            Money::new(decimal("4")),
        );
        assert_eq!(
            Money::new(decimal("-2.5")).rounded(),
            Money::new(decimal("-3")),
        );
    }
}
