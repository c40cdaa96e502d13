//! [`Command`] for re-deriving all the figures of a [`Case`].

use common::operations::{By, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{case, AuctionRound, Case, ComparableProperty},
    infra::{database, Database},
    Service,
};

use super::{
    recompute_auction_round, recompute_comparable_property, Command,
    RecomputeAuctionRound, RecomputeComparableProperty, Recomputed,
};

/// [`Command`] for reconciling all the derived figures of a [`Case`].
///
/// Every [`ComparableProperty`] of the [`Case`] is recomputed first, and
/// only then every [`AuctionRound`], as the latter depend on the former.
#[derive(Clone, Copy, Debug, From)]
pub struct RecomputeCase {
    /// ID of the [`Case`] to be recomputed.
    pub case_id: case::Id,
}

/// Output of [`RecomputeCase`] [`Command`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Output {
    /// Recomputed [`ComparableProperty`]s of the [`Case`].
    pub comparables: Vec<Recomputed<ComparableProperty>>,

    /// Recomputed [`AuctionRound`]s of the [`Case`].
    pub auction_rounds: Vec<Recomputed<AuctionRound>>,
}

impl Output {
    /// Returns the number of records written while recomputing.
    #[must_use]
    pub fn updated(&self) -> usize {
        self.comparables.iter().filter(|c| c.is_updated()).count()
            + self.auction_rounds.iter().filter(|r| r.is_updated()).count()
    }
}

impl<Db> Command<RecomputeCase> for Service<Db>
where
    Db: Database<
            Select<By<Option<Case>, case::Id>>,
            Ok = Option<Case>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<ComparableProperty>, case::Id>>,
            Ok = Vec<ComparableProperty>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<AuctionRound>, case::Id>>,
            Ok = Vec<AuctionRound>,
            Err = Traced<database::Error>,
        >,
    Self: Command<
            RecomputeComparableProperty,
            Ok = Recomputed<ComparableProperty>,
            Err = Traced<recompute_comparable_property::ExecutionError>,
        > + Command<
            RecomputeAuctionRound,
            Ok = Recomputed<AuctionRound>,
            Err = Traced<recompute_auction_round::ExecutionError>,
        >,
{
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    #[tracing::instrument(skip_all, fields(case_id = %cmd.case_id))]
    async fn execute(&self, cmd: RecomputeCase) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let RecomputeCase { case_id } = cmd;

        self.database()
            .execute(Select(By::<Option<Case>, _>::new(case_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::CaseNotExists(case_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        let mut out = Output::default();

        let comparables = self
            .database()
            .execute(Select(By::<Vec<ComparableProperty>, _>::new(case_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        for c in comparables {
            out.comparables.push(
                self.execute(RecomputeComparableProperty {
                    comparable_id: c.id,
                })
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?,
            );
        }

        let rounds = self
            .database()
            .execute(Select(By::<Vec<AuctionRound>, _>::new(case_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        for r in rounds {
            out.auction_rounds.push(
                self.execute(RecomputeAuctionRound {
                    auction_round_id: r.id,
                })
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?,
            );
        }

        log::debug!("{} records updated", out.updated());

        Ok(out)
    }
}

/// Error of [`RecomputeCase`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// Failed to recompute an [`AuctionRound`].
    #[display("Failed to recompute `AuctionRound`: {_0}")]
    #[from]
    AuctionRound(recompute_auction_round::ExecutionError),

    /// [`Case`] with the provided ID does not exist.
    #[display("`Case(id: {_0})` does not exist")]
    CaseNotExists(#[error(not(source))] case::Id),

    /// Failed to recompute a [`ComparableProperty`].
    #[display("Failed to recompute `ComparableProperty`: {_0}")]
    #[from]
    ComparableProperty(recompute_comparable_property::ExecutionError),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),
}
