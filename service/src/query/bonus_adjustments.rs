//! [`Query`] collection related to the multiple [`BonusAdjustment`]s.

use common::operations::By;

#[cfg(doc)]
use crate::{domain::ComparableProperty, Query};
use crate::{
    domain::{comparable_property, BonusAdjustment},
    read,
};

use super::DatabaseQuery;

/// Queries all the [`BonusAdjustment`]s of a [`ComparableProperty`], in
/// their creation order.
pub type ByComparable =
    DatabaseQuery<By<Vec<BonusAdjustment>, comparable_property::Id>>;

/// Queries [`read::bonus_adjustment::Rates`] of all the [`BonusAdjustment`]s
/// of a [`ComparableProperty`].
pub type Rates =
    DatabaseQuery<By<read::bonus_adjustment::Rates, comparable_property::Id>>;
