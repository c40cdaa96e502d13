//! [`Query`] collection related to a single [`Case`].

use common::operations::By;

use crate::domain::{case, Case};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`Case`] by its [`case::Id`].
pub type ById = DatabaseQuery<By<Option<Case>, case::Id>>;
