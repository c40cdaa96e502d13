//! [`Query`] collection related to the multiple [`Survey`]s.

use common::operations::By;

#[cfg(doc)]
use crate::{domain::Case, Query};
use crate::domain::{case, Survey};

use super::DatabaseQuery;

/// Queries all the [`Survey`]s of a [`Case`], in their creation order.
pub type ByCase = DatabaseQuery<By<Vec<Survey>, case::Id>>;
