//! Pricing of an auction round.

use common::{Money, Ping};
use rust_decimal::{Decimal, RoundingStrategy};

use super::{or_zero, InvalidDerivation};

/// Number of decimal places a cost-performance ratio is kept with.
pub const COST_PERFORMANCE_SCALE: u32 = 2;

/// Sums up the provided converted building `areas`.
///
/// # Errors
///
/// [`InvalidDerivation::Overflow`] if the sum doesn't fit.
pub fn total_area(areas: &[Ping]) -> Result<Ping, InvalidDerivation> {
    areas
        .iter()
        .try_fold(Ping::ZERO, |sum, a| sum.checked_add(*a))
        .ok_or(InvalidDerivation::Overflow)
}

/// Calculates the floor price of a single [`Ping`] out of the auction
/// `floor_price` and the converted `areas` of the case buildings.
///
/// Zero is returned if there is no building area, or if the inputs are
/// invalid.
#[must_use]
pub fn unit_floor_price(floor_price: Money, areas: &[Ping]) -> Money {
    or_zero(
        "unit floor price",
        total_area(areas)
            .and_then(|area| try_unit_floor_price(floor_price, area)),
    )
}

/// Calculates the floor price of a single [`Ping`], rounded half-up to a
/// whole currency unit.
///
/// # Errors
///
/// - [`InvalidDerivation::Negative`] if `floor_price` is negative.
/// - [`InvalidDerivation::Overflow`] if the result doesn't fit.
pub fn try_unit_floor_price(
    floor_price: Money,
    total_area: Ping,
) -> Result<Money, InvalidDerivation> {
    if total_area <= Ping::ZERO {
        return Ok(Money::ZERO);
    }
    if floor_price.amount() < Decimal::ZERO {
        return Err(InvalidDerivation::Negative);
    }

    floor_price
        .amount()
        .checked_div(total_area.decimal())
        .map(|price| Money::new(price).rounded())
        .ok_or(InvalidDerivation::Overflow)
}

/// Calculates the mean of the `adjusted_values` of comparable properties.
///
/// The mean is not rounded, and is zero if there are no values.
///
/// # Errors
///
/// [`InvalidDerivation::Overflow`] if the sum doesn't fit.
pub fn mean_value(
    adjusted_values: &[Money],
) -> Result<Money, InvalidDerivation> {
    if adjusted_values.is_empty() {
        return Ok(Money::ZERO);
    }

    adjusted_values
        .iter()
        .try_fold(Decimal::ZERO, |sum, v| sum.checked_add(v.amount()))
        .and_then(|sum| sum.checked_div(Decimal::from(adjusted_values.len())))
        .map(Money::new)
        .ok_or(InvalidDerivation::Overflow)
}

/// Calculates the cost-performance ratio of an auction round: the mean of
/// the `adjusted_values` of comparable properties relative to the
/// `unit_floor_price`.
///
/// Zero is returned if there are no comparable properties, the
/// `unit_floor_price` is zero, or the inputs are invalid.
#[must_use]
pub fn cost_performance(
    adjusted_values: &[Money],
    unit_floor_price: Money,
) -> Decimal {
    or_zero(
        "cost performance",
        try_cost_performance(adjusted_values, unit_floor_price),
    )
}

/// Calculates the cost-performance ratio of an auction round, rounded
/// half-up to [`COST_PERFORMANCE_SCALE`] decimal places.
///
/// # Errors
///
/// [`InvalidDerivation::Overflow`] if the result doesn't fit.
pub fn try_cost_performance(
    adjusted_values: &[Money],
    unit_floor_price: Money,
) -> Result<Decimal, InvalidDerivation> {
    if adjusted_values.is_empty() || unit_floor_price.amount() <= Decimal::ZERO
    {
        return Ok(Decimal::ZERO);
    }

    mean_value(adjusted_values)?
        .amount()
        .checked_div(unit_floor_price.amount())
        .map(|ratio| {
            ratio.round_dp_with_strategy(
                COST_PERFORMANCE_SCALE,
                RoundingStrategy::MidpointAwayFromZero,
            )
        })
        .ok_or(InvalidDerivation::Overflow)
}
