//! [`Query`] collection related to the multiple [`FinalDecision`]s.

use common::operations::By;

#[cfg(doc)]
use crate::{domain::Case, Query};
use crate::domain::{case, FinalDecision};

use super::DatabaseQuery;

/// Queries all the [`FinalDecision`]s of a [`Case`], in their creation order.
pub type ByCase = DatabaseQuery<By<Vec<FinalDecision>, case::Id>>;
