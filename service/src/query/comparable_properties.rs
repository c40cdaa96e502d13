//! [`Query`] collection related to the multiple [`ComparableProperty`]s.

use common::operations::By;

#[cfg(doc)]
use crate::{domain::Case, Query};
use crate::{
    domain::{case, ComparableProperty},
    read,
};

use super::DatabaseQuery;

/// Queries all the [`ComparableProperty`]s of a [`Case`], in their creation
/// order.
pub type ByCase = DatabaseQuery<By<Vec<ComparableProperty>, case::Id>>;

/// Queries [`read::comparable_property::AdjustedValues`] of all the
/// [`ComparableProperty`]s of a [`Case`].
pub type AdjustedValues =
    DatabaseQuery<By<read::comparable_property::AdjustedValues, case::Id>>;
