//! [`Query`] collection related to the multiple [`Person`]s.

use common::operations::By;

#[cfg(doc)]
use crate::{domain::Case, Query};
use crate::domain::{case, Person};

use super::DatabaseQuery;

/// Queries all the [`Person`]s of a [`Case`], in their creation order.
pub type ByCase = DatabaseQuery<By<Vec<Person>, case::Id>>;
