//! [`Query`] collection related to the multiple [`Outcome`]s.

use common::operations::By;

#[cfg(doc)]
use crate::{domain::Case, Query};
use crate::domain::{case, Outcome};

use super::DatabaseQuery;

/// Queries all the [`Outcome`]s of a [`Case`], in their creation order.
pub type ByCase = DatabaseQuery<By<Vec<Outcome>, case::Id>>;
