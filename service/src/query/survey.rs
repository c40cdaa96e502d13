//! [`Query`] collection related to a single [`Survey`].

use common::operations::By;

use crate::domain::{survey, Survey};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`Survey`] by its [`survey::Id`].
pub type ById = DatabaseQuery<By<Option<Survey>, survey::Id>>;
