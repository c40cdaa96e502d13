//! [`Query`] collection related to a single [`FinalDecision`].

use common::operations::By;

use crate::domain::{final_decision, FinalDecision};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`FinalDecision`] by its [`final_decision::Id`].
pub type ById = DatabaseQuery<By<Option<FinalDecision>, final_decision::Id>>;
