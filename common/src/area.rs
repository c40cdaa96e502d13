//! Area units used by land registry transcripts and valuation.
//!
//! Registry transcripts record areas in [`SquareMeters`], while market prices
//! are quoted per [`Ping`].

use std::str::FromStr;

use derive_more::Display;
use rust_decimal::{Decimal, RoundingStrategy};

/// Number of [`Ping`] in a single square meter.
///
/// One ping equals `3.305785` square meters.
pub const PING_PER_SQUARE_METER: Decimal =
    Decimal::from_parts(3025, 0, 0, false, 4);

/// Area in square meters, as written in a registry transcript.
///
/// Any decimal is accepted here: validation of the value happens when an area
/// is derived from it.
#[derive(
    Clone, Copy, Debug, Default, Display, Eq, Hash, Ord, PartialEq, PartialOrd,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(transparent)
)]
pub struct SquareMeters(Decimal);

impl SquareMeters {
    /// Creates a new [`SquareMeters`] area.
    #[must_use]
    pub const fn new(val: Decimal) -> Self {
        Self(val)
    }

    /// Returns the decimal value of this [`SquareMeters`] area.
    #[must_use]
    pub const fn decimal(self) -> Decimal {
        self.0
    }
}

impl FromStr for SquareMeters {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .map(Self)
            .map_err(|_| "invalid `SquareMeters` value")
    }
}

/// Area in ping, the local unit property prices are quoted in.
#[derive(
    Clone, Copy, Debug, Default, Display, Eq, Hash, Ord, PartialEq, PartialOrd,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(transparent)
)]
pub struct Ping(Decimal);

impl Ping {
    /// Zero area.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Number of decimal places a [`Ping`] area is kept with once stored.
    pub const STORED_SCALE: u32 = 2;

    /// Creates a new [`Ping`] area.
    #[must_use]
    pub const fn new(val: Decimal) -> Self {
        Self(val)
    }

    /// Returns the decimal value of this [`Ping`] area.
    #[must_use]
    pub const fn decimal(self) -> Decimal {
        self.0
    }

    /// Rounds this [`Ping`] area half-up to [`Ping::STORED_SCALE`] decimal
    /// places.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self(self.0.round_dp_with_strategy(
            Self::STORED_SCALE,
            RoundingStrategy::MidpointAwayFromZero,
        ))
    }

    /// Adds the provided [`Ping`] area, returning [`None`] on overflow.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }
}

impl FromStr for Ping {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .map(Self)
            .map_err(|_| "invalid `Ping` value")
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::{Ping, SquareMeters, PING_PER_SQUARE_METER};

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn conversion_factor() {
        assert_eq!(PING_PER_SQUARE_METER, decimal("0.3025"));
    }

    #[test]
    fn from_str() {
        assert_eq!(
            SquareMeters::from_str("123.45").unwrap(),
            SquareMeters::new(decimal("123.45")),
        );
        assert_eq!(Ping::from_str("30").unwrap(), Ping::new(decimal("30")));

        assert!(SquareMeters::from_str("12a").is_err());
        assert!(Ping::from_str("").is_err());
    }

    #[test]
    fn rounds_half_up_to_stored_scale() {
        assert_eq!(
            Ping::new(decimal("7.5625")).rounded(),
            Ping::new(decimal("7.56")),
        );
        assert_eq!(
            Ping::new(decimal("0.615")).rounded(),
            Ping::new(decimal("0.62")),
        );
        assert_eq!(
            Ping::new(decimal("10")).rounded(),
            Ping::new(decimal("10")),
        );
    }

    #[test]
    fn checked_add() {
        assert_eq!(
            Ping::new(decimal("1.25")).checked_add(Ping::new(decimal("2.5"))),
            Some(Ping::new(decimal("3.75"))),
        );
        assert_eq!(
            Ping::new(Decimal::MAX).checked_add(Ping::new(Decimal::ONE)),
            None,
        );
    }
}
