//! Report [`Query`]s aggregating figures of a case.

pub mod valuation;

#[cfg(doc)]
use crate::Query;

pub use self::valuation::Valuation;
