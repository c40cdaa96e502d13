//! [`Query`] collection related to a single [`Outcome`].

use common::operations::By;

use crate::domain::{outcome, Outcome};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries an [`Outcome`] by its [`outcome::Id`].
pub type ById = DatabaseQuery<By<Option<Outcome>, outcome::Id>>;
