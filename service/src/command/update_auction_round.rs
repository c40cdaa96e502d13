//! [`Command`] for updating an [`AuctionRound`].

use common::{
    operations::{By, Select, Update},
    Date, DateTime, Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{auction_round, AuctionRound},
    infra::{database, Database},
    Service,
};

use super::{
    recompute_auction_round, Command, RecomputeAuctionRound, Recomputed,
};

/// [`Command`] for updating an [`AuctionRound`].
///
/// All the editable fields are replaced with the provided ones, and the
/// [`AuctionRound`] figures are derived again once it's persisted.
#[derive(Clone, Copy, Debug)]
pub struct UpdateAuctionRound {
    /// ID of the [`AuctionRound`] to be updated.
    pub auction_round_id: auction_round::Id,

    /// New [`auction_round::Round`] of the [`AuctionRound`].
    pub round: auction_round::Round,

    /// New [`Date`] of the [`AuctionRound`].
    pub auction_date: Option<Date>,

    /// New floor price of the [`AuctionRound`].
    pub floor_price: Money,

    /// New number of listing views.
    pub clicks: Option<auction_round::Count>,

    /// New number of listing watchers.
    pub monitors: Option<auction_round::Count>,

    /// New number of similar cases auctioned nearby.
    pub case_count: Option<auction_round::Count>,

    /// New security deposit required to bid.
    pub margin: Option<Money>,
}

impl<Db> Command<UpdateAuctionRound> for Service<Db>
where
    Db: Database<
            Select<By<Option<AuctionRound>, auction_round::Id>>,
            Ok = Option<AuctionRound>,
            Err = Traced<database::Error>,
        > + Database<
            Update<AuctionRound>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
    Self: Command<
        RecomputeAuctionRound,
        Ok = Recomputed<AuctionRound>,
        Err = Traced<recompute_auction_round::ExecutionError>,
    >,
{
    type Ok = AuctionRound;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateAuctionRound,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateAuctionRound {
            auction_round_id,
            round: number,
            auction_date,
            floor_price,
            clicks,
            monitors,
            case_count,
            margin,
        } = cmd;

        let mut round = self
            .database()
            .execute(Select(By::<Option<AuctionRound>, _>::new(
                auction_round_id,
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::AuctionRoundNotExists(auction_round_id))
            .map_err(tracerr::wrap!())?;

        round.round = number;
        round.auction_date = auction_date;
        round.floor_price = floor_price;
        round.clicks = clicks;
        round.monitors = monitors;
        round.case_count = case_count;
        round.margin = margin;
        round.updated_at = DateTime::now().coerce();

        self.database()
            .execute(Update(round))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        self.execute(RecomputeAuctionRound { auction_round_id })
            .await
            .map(Recomputed::into_inner)
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`UpdateAuctionRound`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`AuctionRound`] with the provided ID does not exist.
    #[display("`AuctionRound(id: {_0})` does not exist")]
    AuctionRoundNotExists(#[error(not(source))] auction_round::Id),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// Failed to recompute the [`AuctionRound`].
    #[display("Failed to recompute `AuctionRound`: {_0}")]
    #[from]
    Recompute(recompute_auction_round::ExecutionError),
}
