//! [`Query`] collection related to a single [`AuctionRound`].

use common::operations::By;

use crate::domain::{auction_round, AuctionRound};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries an [`AuctionRound`] by its [`auction_round::Id`].
pub type ById = DatabaseQuery<By<Option<AuctionRound>, auction_round::Id>>;
