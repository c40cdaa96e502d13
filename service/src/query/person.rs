//! [`Query`] collection related to a single [`Person`].

use common::operations::By;

use crate::domain::{person, Person};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`Person`] by its [`person::Id`].
pub type ById = DatabaseQuery<By<Option<Person>, person::Id>>;
