//! [`Query`] collection related to the multiple [`Case`]s.

use common::operations::By;

#[cfg(doc)]
use crate::{domain::user::Id as User, Query};
use crate::domain::{user, Case};

use super::DatabaseQuery;

/// Queries all the [`Case`]s owned by a [`User`], ordered by their numbers.
pub type ByOwner = DatabaseQuery<By<Vec<Case>, user::Id>>;
