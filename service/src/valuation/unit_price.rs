//! Unit price of a comparable property.

use common::{Money, Ping};
use rust_decimal::Decimal;

use super::{or_zero, InvalidDerivation};

/// Calculates the price of a single [`Ping`] out of the `total` price, the
/// main `build` area and the `sub` (additional) build area counted as a half.
///
/// Zero is returned if the effective area is zero, or if the inputs are
/// invalid.
#[must_use]
pub fn calculate(total: Money, build: Ping, sub: Ping) -> Money {
    or_zero("unit price", try_calculate(total, build, sub))
}

/// Calculates the price of a single [`Ping`], rounded half-up to a whole
/// currency unit.
///
/// # Errors
///
/// - [`InvalidDerivation::Negative`] if any of the inputs is negative.
/// - [`InvalidDerivation::Overflow`] if the result doesn't fit.
pub fn try_calculate(
    total: Money,
    build: Ping,
    sub: Ping,
) -> Result<Money, InvalidDerivation> {
    if [total.amount(), build.decimal(), sub.decimal()]
        .into_iter()
        .any(|d| d < Decimal::ZERO)
    {
        return Err(InvalidDerivation::Negative);
    }

    let area = sub
        .decimal()
        .checked_div(Decimal::from(2))
        .and_then(|half| build.decimal().checked_add(half))
        .ok_or(InvalidDerivation::Overflow)?;
    if area.is_zero() {
        return Ok(Money::ZERO);
    }

    total
        .amount()
        .checked_div(area)
        .map(|price| Money::new(price).rounded())
        .ok_or(InvalidDerivation::Overflow)
}
