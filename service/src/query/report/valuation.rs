//! [`Valuation`] definition.

use common::{
    operations::{By, Select},
    Date, Money, Ping,
};
use rust_decimal::Decimal;
use tracerr::Traced;

use crate::{
    domain::{auction_round, case, AuctionRound, Case},
    infra::{database, Database},
    read,
    valuation::{auction, or_zero},
    Query, Service,
};

/// [`Query`] to summarize the valuation of a [`Case`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Valuation {
    /// ID of the [`Case`] to summarize.
    pub case_id: case::Id,
}

/// Output of the [`Valuation`] [`Query`].
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Output {
    /// Summarized [`Case`].
    pub case: Case,

    /// Full address of the [`Case`].
    pub address: String,

    /// Total converted area of the [`Case`] land parcels.
    pub land_area: Ping,

    /// Total converted area of the [`Case`] building units.
    pub building_area: Ping,

    /// Mean adjusted value of the [`Case`] comparable properties.
    pub mean_adjusted_value: Money,

    /// Rows of the [`Case`] auction rounds, ordered by their round.
    pub auction_rounds: Vec<Row>,
}

/// Row in the [`Output`] of the [`Valuation`] [`Query`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Row {
    /// ID of the [`AuctionRound`].
    pub id: auction_round::Id,

    /// [`auction_round::Round`] of the [`AuctionRound`].
    pub round: auction_round::Round,

    /// [`Date`] of the [`AuctionRound`], if scheduled.
    pub auction_date: Option<Date>,

    /// Floor price of the [`AuctionRound`].
    pub floor_price: Money,

    /// Floor price of a single [`Ping`] of the [`Case`] buildings.
    pub unit_floor_price: Money,

    /// Ratio of the mean comparable value to the unit floor price.
    pub cost_performance: Decimal,
}

impl From<AuctionRound> for Row {
    fn from(round: AuctionRound) -> Self {
        Self {
            id: round.id,
            round: round.round,
            auction_date: round.auction_date,
            floor_price: round.floor_price,
            unit_floor_price: round.unit_floor_price(),
            cost_performance: round.cost_performance(),
        }
    }
}

impl<Db> Query<Valuation> for Service<Db>
where
    Db: Database<
            Select<By<Option<Case>, case::Id>>,
            Ok = Option<Case>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<read::land_parcel::ConvertedAreas, case::Id>>,
            Ok = read::land_parcel::ConvertedAreas,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<read::building_unit::ConvertedAreas, case::Id>>,
            Ok = read::building_unit::ConvertedAreas,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<read::comparable_property::AdjustedValues, case::Id>>,
            Ok = read::comparable_property::AdjustedValues,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<AuctionRound>, case::Id>>,
            Ok = Vec<AuctionRound>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Option<Output>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Valuation { case_id }: Valuation,
    ) -> Result<Self::Ok, Self::Err> {
        let Some(case) = self
            .database()
            .execute(Select(By::<Option<Case>, _>::new(case_id)))
            .await
            .map_err(tracerr::wrap!())?
        else {
            return Ok(None);
        };

        let land = self
            .database()
            .execute(Select(By::<read::land_parcel::ConvertedAreas, _>::new(
                case_id,
            )))
            .await
            .map_err(tracerr::wrap!())?;
        let buildings = self
            .database()
            .execute(Select(By::<
                read::building_unit::ConvertedAreas,
                _,
            >::new(case_id)))
            .await
            .map_err(tracerr::wrap!())?;
        let values = self
            .database()
            .execute(Select(By::<
                read::comparable_property::AdjustedValues,
                _,
            >::new(case_id)))
            .await
            .map_err(tracerr::wrap!())?;
        let mut rounds = self
            .database()
            .execute(Select(By::<Vec<AuctionRound>, _>::new(case_id)))
            .await
            .map_err(tracerr::wrap!())?;
        rounds.sort_by_key(|r| r.round.u8());

        Ok(Some(Output {
            address: case.address.full(),
            case,
            land_area: or_zero("land area", auction::total_area(&land)),
            building_area: or_zero(
                "building area",
                auction::total_area(&buildings),
            ),
            mean_adjusted_value: or_zero(
                "mean adjusted value",
                auction::mean_value(&values),
            )
            .rounded(),
            auction_rounds: rounds.into_iter().map(Row::from).collect(),
        }))
    }
}

#[cfg(all(test, feature = "memory"))]
mod spec {
    use common::{Money, Ping};

    use crate::{
        command::{fixture, Command as _, CreateLandParcel},
        domain::case,
    };

    use super::Valuation;

    #[tokio::test]
    async fn summarizes_case() {
        let svc = fixture::service();
        let case = fixture::new_case(&svc).await;
        for area in ["100", "200"] {
            _ = svc
                .execute(CreateLandParcel {
                    case_id: case.id,
                    land_number: None,
                    registry_url: None,
                    holding: fixture::holding(area, 1, 2),
                    remark: None,
                })
                .await
                .unwrap();
        }
        _ = fixture::new_building_unit(
            &svc,
            case.id,
            fixture::holding("99.17355", 1, 1),
        )
        .await;
        _ = fixture::new_comparable(&svc, case.id, "3000000", "30").await;
        _ = fixture::new_comparable(&svc, case.id, "3000060", "30").await;
        let round = fixture::new_auction_round(&svc, case.id, "3000000").await;

        let out = svc
            .execute(Valuation { case_id: case.id })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(out.case, case);
        assert_eq!(out.land_area, fixture::ping("45.38"));
        assert_eq!(out.building_area, fixture::ping("30"));
        assert_eq!(out.mean_adjusted_value, fixture::money("100001"));
        assert_eq!(out.auction_rounds.len(), 1);
        assert_eq!(out.auction_rounds[0].id, round.id);
        assert_eq!(
            out.auction_rounds[0].unit_floor_price,
            fixture::money("100000"),
        );
        assert_eq!(
            out.auction_rounds[0].cost_performance,
            fixture::decimal("1"),
        );
    }

    #[tokio::test]
    async fn empty_case_has_zero_figures() {
        let svc = fixture::service();
        let case = fixture::new_case(&svc).await;

        let out = svc
            .execute(Valuation { case_id: case.id })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(out.land_area, Ping::ZERO);
        assert_eq!(out.building_area, Ping::ZERO);
        assert_eq!(out.mean_adjusted_value, Money::ZERO);
        assert!(out.auction_rounds.is_empty());
    }

    #[tokio::test]
    async fn missing_case_gives_nothing() {
        let svc = fixture::service();

        let out = svc
            .execute(Valuation {
                case_id: case::Id::new(),
            })
            .await
            .unwrap();

        assert!(out.is_none());
    }
}
