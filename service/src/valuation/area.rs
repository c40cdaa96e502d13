//! Conversion of registered areas into held [`Ping`] areas.

use common::{area::PING_PER_SQUARE_METER, Ping, SquareMeters};
use rust_decimal::Decimal;

use crate::domain::holding::Share;

use super::{or_zero, InvalidDerivation};

/// Divisor applied to a held area after its conversion into [`Ping`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Divisor(u8);

impl Divisor {
    /// Area is taken as is.
    pub const WHOLE: Self = Self(1);

    /// Only a half of the area is taken.
    pub const HALF: Self = Self(2);

    /// Only a quarter of the area is taken.
    pub const QUARTER: Self = Self(4);
}

/// Converts the held share of the registered `area` into [`Ping`].
///
/// Zero is returned if either `total` share or `area` is zero, or if the
/// inputs are invalid.
#[must_use]
pub fn convert(
    personal: Share,
    total: Share,
    area: SquareMeters,
    divisor: Divisor,
) -> Ping {
    or_zero("area", try_convert(personal, total, area, divisor))
}

/// Converts the held share of the registered `area` into [`Ping`].
///
/// # Errors
///
/// - [`InvalidDerivation::Negative`] if `area` is negative.
/// - [`InvalidDerivation::Overflow`] if the result doesn't fit.
pub fn try_convert(
    personal: Share,
    total: Share,
    area: SquareMeters,
    divisor: Divisor,
) -> Result<Ping, InvalidDerivation> {
    let area = area.decimal();
    if total == 0 || area.is_zero() {
        return Ok(Ping::ZERO);
    }
    if area < Decimal::ZERO {
        return Err(InvalidDerivation::Negative);
    }

    Decimal::from(personal)
        .checked_div(Decimal::from(total))
        .and_then(|share| share.checked_mul(area))
        .and_then(|sqm| sqm.checked_mul(PING_PER_SQUARE_METER))
        .and_then(|ping| ping.checked_div(Decimal::from(divisor.0)))
        .map(Ping::new)
        .ok_or(InvalidDerivation::Overflow)
}
