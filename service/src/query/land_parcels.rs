//! [`Query`] collection related to the multiple [`LandParcel`]s.

use common::operations::By;

#[cfg(doc)]
use crate::{domain::Case, Query};
use crate::{
    domain::{case, LandParcel},
    read,
};

use super::DatabaseQuery;

/// Queries all the [`LandParcel`]s of a [`Case`], in their creation order.
pub type ByCase = DatabaseQuery<By<Vec<LandParcel>, case::Id>>;

/// Queries [`read::land_parcel::ConvertedAreas`] of all the
/// [`LandParcel`]s of a [`Case`].
pub type ConvertedAreas =
    DatabaseQuery<By<read::land_parcel::ConvertedAreas, case::Id>>;
