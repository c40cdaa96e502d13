//! [`Command`] for re-deriving the figures of an [`AuctionRound`].

use common::{
    operations::{By, Select, Update},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{auction_round, case, AuctionRound},
    infra::{database, Database},
    read::{building_unit::ConvertedAreas, comparable_property::AdjustedValues},
    Service,
};

use super::{Command, Recomputed};

/// [`Command`] for re-deriving the unit floor price and the cost performance
/// of an [`AuctionRound`] from the persisted records of its case.
///
/// The [`AuctionRound`] is written only if any of its figures has changed.
#[derive(Clone, Copy, Debug, From)]
pub struct RecomputeAuctionRound {
    /// ID of the [`AuctionRound`] to be recomputed.
    pub auction_round_id: auction_round::Id,
}

impl<Db> Command<RecomputeAuctionRound> for Service<Db>
where
    Db: Database<
            Select<By<Option<AuctionRound>, auction_round::Id>>,
            Ok = Option<AuctionRound>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<ConvertedAreas, case::Id>>,
            Ok = ConvertedAreas,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<AdjustedValues, case::Id>>,
            Ok = AdjustedValues,
            Err = Traced<database::Error>,
        > + Database<
            Update<AuctionRound>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
{
    type Ok = Recomputed<AuctionRound>;
    type Err = Traced<ExecutionError>;

    #[tracing::instrument(
        skip_all,
        fields(auction_round_id = %cmd.auction_round_id),
    )]
    async fn execute(
        &self,
        cmd: RecomputeAuctionRound,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let RecomputeAuctionRound { auction_round_id } = cmd;

        let mut round = self
            .database()
            .execute(Select(By::<Option<AuctionRound>, _>::new(
                auction_round_id,
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::AuctionRoundNotExists(auction_round_id))
            .map_err(tracerr::wrap!())?;

        let areas = self
            .database()
            .execute(Select(By::<ConvertedAreas, _>::new(round.case_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        let values = self
            .database()
            .execute(Select(By::<AdjustedValues, _>::new(round.case_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        if !round.apply_aggregates(&areas, &values) {
            log::debug!("auction figures are up to date");
            return Ok(Recomputed::Unchanged(round));
        }
        round.updated_at = DateTime::now().coerce();

        self.database()
            .execute(Update(round.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(Recomputed::Updated(round))
    }
}

/// Error of [`RecomputeAuctionRound`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`AuctionRound`] with the provided ID does not exist.
    #[display("`AuctionRound(id: {_0})` does not exist")]
    AuctionRoundNotExists(#[error(not(source))] auction_round::Id),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),
}
