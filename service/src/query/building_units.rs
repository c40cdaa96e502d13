//! [`Query`] collection related to the multiple [`BuildingUnit`]s.

use common::operations::By;

#[cfg(doc)]
use crate::{domain::Case, Query};
use crate::{
    domain::{case, BuildingUnit},
    read,
};

use super::DatabaseQuery;

/// Queries all the [`BuildingUnit`]s of a [`Case`], in their creation order.
pub type ByCase = DatabaseQuery<By<Vec<BuildingUnit>, case::Id>>;

/// Queries [`read::building_unit::ConvertedAreas`] of all the
/// [`BuildingUnit`]s of a [`Case`].
pub type ConvertedAreas =
    DatabaseQuery<By<read::building_unit::ConvertedAreas, case::Id>>;
