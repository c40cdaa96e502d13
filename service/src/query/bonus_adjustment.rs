//! [`Query`] collection related to a single [`BonusAdjustment`].

use common::operations::By;

use crate::domain::{bonus_adjustment, BonusAdjustment};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`BonusAdjustment`] by its [`bonus_adjustment::Id`].
pub type ById =
    DatabaseQuery<By<Option<BonusAdjustment>, bonus_adjustment::Id>>;
