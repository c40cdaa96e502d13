//! Valuation rules deriving figures of a foreclosure case.
//!
//! Every rule comes in two flavors: a `try_*` function reporting an
//! [`InvalidDerivation`], and a plain one recovering from it with a zero
//! value, which is what gets persisted.

pub mod area;
pub mod auction;
pub mod bonus;
pub mod unit_price;

use derive_more::{Display, Error};
use tracing as log;

/// Error of deriving a valuation figure from invalid inputs.
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum InvalidDerivation {
    /// Arithmetic overflowed the decimal range.
    #[display("arithmetic overflow")]
    Overflow,

    /// Operand is negative, while it must not be.
    #[display("negative operand")]
    Negative,
}

/// Recovers the provided derivation `result`, returning a zero value and
/// logging the cause on failure.
pub fn or_zero<T: Default>(
    what: &'static str,
    result: Result<T, InvalidDerivation>,
) -> T {
    result.unwrap_or_else(|e| {
        log::warn!("Cannot derive {what}, falling back to zero: {e}");
        T::default()
    })
}

#[cfg(test)]
mod spec {
    use common::Money;

    use super::{or_zero, InvalidDerivation};

    #[test]
    fn recovers_with_zero() {
        assert_eq!(
            or_zero::<Money>("price", Err(InvalidDerivation::Overflow)),
            Money::ZERO,
        );
    }

    #[test]
    fn passes_through_valid_result() {
        let price = Money::new(100.into());

        assert_eq!(or_zero("price", Ok(price)), price);
    }
}
