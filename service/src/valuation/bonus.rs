//! Bonus adjustments of a comparable property value.

use common::{Money, Rate};
use rust_decimal::Decimal;

use super::{or_zero, InvalidDerivation};

/// Calculates the arithmetic mean of the provided `rates`.
///
/// Zero is returned for no `rates`.
///
/// # Errors
///
/// [`InvalidDerivation::Overflow`] if the sum of `rates` doesn't fit.
pub fn mean_rate(rates: &[Rate]) -> Result<Decimal, InvalidDerivation> {
    if rates.is_empty() {
        return Ok(Decimal::ZERO);
    }

    rates
        .iter()
        .try_fold(Decimal::ZERO, |sum, r| sum.checked_add(r.decimal()))
        .and_then(|sum| sum.checked_div(Decimal::from(rates.len())))
        .ok_or(InvalidDerivation::Overflow)
}

/// Adjusts the `unit_price` by the mean of the provided bonus `rates`.
///
/// Zero is returned if the inputs are invalid.
#[must_use]
pub fn adjusted_value(rates: &[Rate], unit_price: Money) -> Money {
    or_zero("adjusted value", try_adjusted_value(rates, unit_price))
}

/// Adjusts the `unit_price` by the mean of the provided bonus `rates`,
/// rounding the result half-up to a whole currency unit.
///
/// # Errors
///
/// - [`InvalidDerivation::Negative`] if `unit_price` is negative.
/// - [`InvalidDerivation::Overflow`] if the result doesn't fit.
pub fn try_adjusted_value(
    rates: &[Rate],
    unit_price: Money,
) -> Result<Money, InvalidDerivation> {
    if unit_price.amount() < Decimal::ZERO {
        return Err(InvalidDerivation::Negative);
    }

    let coefficient = mean_rate(rates)? + Decimal::ONE;
    coefficient
        .checked_mul(unit_price.amount())
        .map(|value| Money::new(value).rounded())
        .ok_or(InvalidDerivation::Overflow)
}

#[cfg(test)]
mod spec {
    use common::{Money, Rate};
    use rust_decimal::Decimal;

    use super::{
        adjusted_value, mean_rate, try_adjusted_value, InvalidDerivation,
    };

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn rates(ss: &[&str]) -> Vec<Rate> {
        ss.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn mean_of_no_rates_is_zero() {
        assert_eq!(mean_rate(&[]), Ok(Decimal::ZERO));
    }

    #[test]
    fn mean_of_rates() {
        assert_eq!(mean_rate(&rates(&["0.1", "0.2"])), Ok(decimal("0.15")));
        assert_eq!(mean_rate(&rates(&["-0.1"])), Ok(decimal("-0.1")));
    }

    #[test]
    fn opposite_rates_cancel_out() {
        assert_eq!(
            adjusted_value(&rates(&["0.05", "-0.05"]), Money::new(100.into())),
            Money::new(100.into()),
        );
    }

    #[test]
    fn no_rates_keep_unit_price() {
        assert_eq!(
            adjusted_value(&[], Money::new(33333.into())),
            Money::new(33333.into()),
        );
    }

    #[test]
    fn adjusts_and_rounds_half_up() {
        assert_eq!(
            adjusted_value(&rates(&["0.05", "0.1"]), Money::new(33333.into())),
            Money::new(35833.into()),
        );
        assert_eq!(
            adjusted_value(&rates(&["-0.1"]), Money::new(100_000.into())),
            Money::new(90_000.into()),
        );
    }

    #[test]
    fn negative_unit_price_is_invalid() {
        assert_eq!(
            try_adjusted_value(&[], Money::new((-1).into())),
            Err(InvalidDerivation::Negative),
        );
    }
}
