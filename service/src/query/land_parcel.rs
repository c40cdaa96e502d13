//! [`Query`] collection related to a single [`LandParcel`].

use common::operations::By;

use crate::domain::{land_parcel, LandParcel};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`LandParcel`] by its [`land_parcel::Id`].
pub type ById = DatabaseQuery<By<Option<LandParcel>, land_parcel::Id>>;
