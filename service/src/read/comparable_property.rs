//! [`ComparableProperty`]-related read definitions.

use common::Money;
use derive_more::{Deref, From, Into};

#[cfg(doc)]
use crate::domain::{Case, ComparableProperty};

/// Adjusted values of all the [`ComparableProperty`]s of a [`Case`].
#[derive(Clone, Debug, Default, Deref, Eq, From, Into, PartialEq)]
pub struct AdjustedValues(pub Vec<Money>);
