//! [`Query`] collection related to a single [`ComparableProperty`].

use common::operations::By;

use crate::domain::{comparable_property, ComparableProperty};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`ComparableProperty`] by its [`comparable_property::Id`].
pub type ById =
    DatabaseQuery<By<Option<ComparableProperty>, comparable_property::Id>>;
