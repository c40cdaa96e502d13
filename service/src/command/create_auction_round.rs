//! [`Command`] for creating a new [`AuctionRound`].

use common::{
    operations::{By, Insert, Select},
    Date, DateTime, Money,
};
use derive_more::{Display, Error, From};
use rust_decimal::Decimal;
use tracerr::Traced;

use crate::{
    domain::{auction_round, case, AuctionRound, Case},
    infra::{database, Database},
    Service,
};

use super::{
    recompute_auction_round, Command, RecomputeAuctionRound, Recomputed,
};

/// [`Command`] for creating a new [`AuctionRound`] of a [`Case`].
///
/// The [`AuctionRound`] figures are derived once it's persisted.
#[derive(Clone, Copy, Debug)]
pub struct CreateAuctionRound {
    /// ID of the [`Case`] a new [`AuctionRound`] belongs to.
    pub case_id: case::Id,

    /// [`auction_round::Round`] of a new [`AuctionRound`].
    pub round: auction_round::Round,

    /// [`Date`] of a new [`AuctionRound`].
    pub auction_date: Option<Date>,

    /// Floor price of a new [`AuctionRound`].
    pub floor_price: Money,

    /// Number of listing views.
    pub clicks: Option<auction_round::Count>,

    /// Number of listing watchers.
    pub monitors: Option<auction_round::Count>,

    /// Number of similar cases auctioned nearby.
    pub case_count: Option<auction_round::Count>,

    /// Security deposit required to bid.
    pub margin: Option<Money>,
}

impl<Db> Command<CreateAuctionRound> for Service<Db>
where
    Db: Database<
            Select<By<Option<Case>, case::Id>>,
            Ok = Option<Case>,
            Err = Traced<database::Error>,
        > + Database<
            Insert<AuctionRound>,
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
        cmd: CreateAuctionRound,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateAuctionRound {
            case_id,
            round,
            auction_date,
            floor_price,
            clicks,
            monitors,
            case_count,
            margin,
        } = cmd;

        self.database()
            .execute(Select(By::<Option<Case>, _>::new(case_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::CaseNotExists(case_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        let now = DateTime::now();
        let round = AuctionRound {
            id: auction_round::Id::new(),
            case_id,
            round,
            auction_date,
            floor_price,
            clicks,
            monitors,
            case_count,
            margin,
            unit_floor_price: Money::ZERO,
            cost_performance: Decimal::ZERO,
            created_at: now.coerce(),
            updated_at: now.coerce(),
        };

        self.database()
            .execute(Insert(round.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        self.execute(RecomputeAuctionRound {
            auction_round_id: round.id,
        })
        .await
        .map(Recomputed::into_inner)
        .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`CreateAuctionRound`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Case`] with the provided ID does not exist.
    #[display("`Case(id: {_0})` does not exist")]
    CaseNotExists(#[error(not(source))] case::Id),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// Failed to recompute the [`AuctionRound`].
    #[display("Failed to recompute `AuctionRound`: {_0}")]
    #[from]
    Recompute(recompute_auction_round::ExecutionError),
}

#[cfg(all(test, feature = "memory"))]
mod spec {
    use common::Money;

    use crate::{
        command::{fixture, Command as _},
        domain::{auction_round::Round, case},
        query,
    };

    use super::{CreateAuctionRound, ExecutionError};

    fn cmd(case_id: case::Id, floor_price: &str) -> CreateAuctionRound {
        CreateAuctionRound {
            case_id,
            round: Round::Second,
            auction_date: "2024-11-05".parse().ok(),
            floor_price: fixture::money(floor_price),
            clicks: Some(120),
            monitors: Some(8),
            case_count: None,
            margin: Some(fixture::money("600000")),
        }
    }

    #[tokio::test]
    async fn prices_per_ping_and_against_comparables() {
        let svc = fixture::service();
        let case = fixture::new_case(&svc).await;
        // 99.17355 m² held whole converts to 30 ping.
        _ = fixture::new_building_unit(
            &svc,
            case.id,
            fixture::holding("99.17355", 1, 1),
        )
        .await;
        _ = fixture::new_comparable(&svc, case.id, "3600000", "30").await;

        let round = svc.execute(cmd(case.id, "3000000")).await.unwrap();

        assert_eq!(round.unit_floor_price(), fixture::money("100000"));
        assert_eq!(round.cost_performance(), fixture::decimal("1.20"));
        assert_eq!(
            svc.execute(query::auction_round::ById::by(round.id))
                .await
                .unwrap(),
            Some(round),
        );
    }

    #[tokio::test]
    async fn zero_without_buildings() {
        let svc = fixture::service();
        let case = fixture::new_case(&svc).await;
        _ = fixture::new_comparable(&svc, case.id, "3600000", "30").await;

        let round = svc.execute(cmd(case.id, "3000000")).await.unwrap();

        assert_eq!(round.unit_floor_price(), Money::ZERO);
        assert!(round.cost_performance().is_zero());
    }

    #[tokio::test]
    async fn fails_on_missing_case() {
        let svc = fixture::service();
        let case_id = case::Id::new();

        let err = svc.execute(cmd(case_id, "1")).await.unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::CaseNotExists(_)));
        assert!(svc
            .execute(query::auction_rounds::ByCase::by(case_id))
            .await
            .unwrap()
            .is_empty());
    }
}
