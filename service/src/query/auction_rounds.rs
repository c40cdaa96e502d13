//! [`Query`] collection related to the multiple [`AuctionRound`]s.

use common::operations::By;

#[cfg(doc)]
use crate::{domain::Case, Query};
use crate::domain::{case, AuctionRound};

use super::DatabaseQuery;

/// Queries all the [`AuctionRound`]s of a [`Case`], in their creation order.
pub type ByCase = DatabaseQuery<By<Vec<AuctionRound>, case::Id>>;
