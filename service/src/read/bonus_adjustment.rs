//! [`BonusAdjustment`]-related read definitions.

use common::Rate;
use derive_more::{Deref, From, Into};

#[cfg(doc)]
use crate::domain::{BonusAdjustment, ComparableProperty};

/// Rates of all the [`BonusAdjustment`]s of a [`ComparableProperty`].
#[derive(Clone, Debug, Default, Deref, Eq, From, Into, PartialEq)]
pub struct Rates(pub Vec<Rate>);
