//! [`Query`] collection related to a single [`BuildingUnit`].

use common::operations::By;

use crate::domain::{building_unit, BuildingUnit};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`BuildingUnit`] by its [`building_unit::Id`].
pub type ById = DatabaseQuery<By<Option<BuildingUnit>, building_unit::Id>>;
