//! Replaying of a [`Snapshot`] through the [`Service`] commands.

use derive_more::{Display, Error as StdError, From};
use service::{
    command::{
        self, create_auction_round, create_bonus_adjustment,
        create_building_unit, create_case, create_comparable_property,
        create_final_decision, create_land_parcel, create_outcome,
        create_person, create_survey, recompute_case,
    },
    domain::{case, user},
    Command as _,
};
use tracerr::Traced;
use tracing as log;

use crate::{snapshot::Snapshot, Service};

/// Replays the provided [`Snapshot`] on the [`Service`], creating a new case
/// with all its records.
///
/// Records are created in their dependency order: registry records and
/// comparable properties with their bonuses go before auction rounds, so
/// each of them is derived from the already persisted figures. Surveys,
/// final decisions and outcomes derive nothing and go last.
///
/// # Errors
///
/// If any of the records cannot be created.
pub async fn replay(
    service: &Service,
    snapshot: Snapshot,
) -> Result<case::Id, Traced<Error>> {
    let Snapshot {
        case,
        land_parcels,
        building_units,
        persons,
        comparables,
        auction_rounds,
        surveys,
        final_decisions,
        outcomes,
    } = snapshot;

    let case = service
        .execute(command::CreateCase {
            number: case.number,
            company: case.company,
            status: case.status,
            owner_id: case.owner_id.unwrap_or_else(user::Id::new),
            address: case.address.into(),
        })
        .await
        .map_err(tracerr::map_from_and_wrap!(=> Error))?;
    log::info!("`Case(id: {})` created: {}", case.id, case.number);

    for p in land_parcels {
        _ = service
            .execute(command::CreateLandParcel {
                case_id: case.id,
                land_number: p.land_number,
                registry_url: p.registry_url,
                holding: p.holding,
                remark: p.remark,
            })
            .await
            .map_err(tracerr::map_from_and_wrap!(=> Error))?;
    }

    for u in building_units {
        _ = service
            .execute(command::CreateBuildingUnit {
                case_id: case.id,
                build_number: u.build_number,
                registry_url: u.registry_url,
                holding: u.holding,
                usage: u.usage,
                use_partition: u.use_partition,
                remark: u.remark,
            })
            .await
            .map_err(tracerr::map_from_and_wrap!(=> Error))?;
    }

    for p in persons {
        _ = service
            .execute(command::CreatePerson {
                case_id: case.id,
                name: p.name,
                role: p.role,
                phone: p.phone,
            })
            .await
            .map_err(tracerr::map_from_and_wrap!(=> Error))?;
    }

    for c in comparables {
        let comparable = service
            .execute(command::CreateComparableProperty {
                case_id: case.id,
                kind: c.kind,
                address: c.address,
                attachment_url: c.attachment_url,
                house_age: c.house_age,
                transaction_date: c.transaction_date,
                floor_height: c.floor_height,
                total_price: c.total_price,
                build_area: c.build_area,
                sub_build_area: c.sub_build_area,
            })
            .await
            .map_err(tracerr::map_from_and_wrap!(=> Error))?;

        for b in c.bonuses {
            _ = service
                .execute(command::CreateBonusAdjustment {
                    comparable_id: comparable.id,
                    inspector_id: b.inspector_id,
                    rate: b.rate,
                    reason: b.reason,
                })
                .await
                .map_err(tracerr::map_from_and_wrap!(=> Error))?;
        }
    }

    for r in auction_rounds {
        _ = service
            .execute(command::CreateAuctionRound {
                case_id: case.id,
                round: r.round,
                auction_date: r.auction_date,
                floor_price: r.floor_price,
                clicks: r.clicks,
                monitors: r.monitors,
                case_count: r.case_count,
                margin: r.margin,
            })
            .await
            .map_err(tracerr::map_from_and_wrap!(=> Error))?;
    }

    for s in surveys {
        _ = service
            .execute(command::CreateSurvey {
                case_id: case.id,
                first_day: s.first_day,
                second_day: s.second_day,
                links: s.links,
            })
            .await
            .map_err(tracerr::map_from_and_wrap!(=> Error))?;
    }

    for d in final_decisions {
        _ = service
            .execute(command::CreateFinalDecision {
                case_id: case.id,
                verdict: d.verdict,
                category: d.category,
                remark: d.remark,
                decision_maker: d.decision_maker,
                date: d.date,
                work_area: d.work_area,
            })
            .await
            .map_err(tracerr::map_from_and_wrap!(=> Error))?;
    }

    for o in outcomes {
        _ = service
            .execute(command::CreateOutcome {
                case_id: case.id,
                stop_buy_date: o.stop_buy_date,
                action: o.action,
                bid_round: o.bid_round,
                bid_money: o.bid_money,
                object_number: o.object_number,
            })
            .await
            .map_err(tracerr::map_from_and_wrap!(=> Error))?;
    }

    let recomputed = service
        .execute(command::RecomputeCase { case_id: case.id })
        .await
        .map_err(tracerr::map_from_and_wrap!(=> Error))?;
    if recomputed.updated() > 0 {
        log::warn!(
            "{} records of `Case(id: {})` were stale after replay",
            recomputed.updated(),
            case.id,
        );
    }

    Ok(case.id)
}

/// Error of [`replay`]ing a [`Snapshot`].
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Failed to create the case.
    #[display("failed to create case: {_0}")]
    Case(create_case::ExecutionError),

    /// Failed to create a land parcel.
    #[display("failed to create land parcel: {_0}")]
    LandParcel(create_land_parcel::ExecutionError),

    /// Failed to create a building unit.
    #[display("failed to create building unit: {_0}")]
    BuildingUnit(create_building_unit::ExecutionError),

    /// Failed to create a person.
    #[display("failed to create person: {_0}")]
    Person(create_person::ExecutionError),

    /// Failed to create a comparable property.
    #[display("failed to create comparable property: {_0}")]
    ComparableProperty(create_comparable_property::ExecutionError),

    /// Failed to create a bonus adjustment.
    #[display("failed to create bonus adjustment: {_0}")]
    BonusAdjustment(create_bonus_adjustment::ExecutionError),

    /// Failed to create an auction round.
    #[display("failed to create auction round: {_0}")]
    AuctionRound(create_auction_round::ExecutionError),

    /// Failed to create a survey.
    #[display("failed to create survey: {_0}")]
    Survey(create_survey::ExecutionError),

    /// Failed to create a final decision.
    #[display("failed to create final decision: {_0}")]
    FinalDecision(create_final_decision::ExecutionError),

    /// Failed to create an outcome.
    #[display("failed to create outcome: {_0}")]
    Outcome(create_outcome::ExecutionError),

    /// Failed to reconcile the case.
    #[display("failed to recompute case: {_0}")]
    Recompute(recompute_case::ExecutionError),
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;
    use service::{
        command::recompute_case,
        domain::case,
        infra::Memory,
        query::{self, report::Valuation, Query as _},
    };

    use crate::{snapshot::Snapshot, Service};

    use super::{replay, Error};

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn replays_demo_snapshot() {
        let snapshot: Snapshot =
            serde_json::from_str(include_str!("../../demos/case.json"))
                .unwrap();
        let service = Service::new(Memory::new());

        let case_id = replay(&service, snapshot).await.unwrap();

        let out = service
            .execute(Valuation { case_id })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            out.address,
            "臺北市大安區龍門里5鄰忠孝東路三段10巷7號3樓",
        );
        assert_eq!(out.land_area.decimal(), decimal("3.14"));
        assert_eq!(out.building_area.decimal(), decimal("33.03"));
        assert_eq!(out.mean_adjusted_value.amount(), decimal("537909"));

        let rounds = out
            .auction_rounds
            .iter()
            .map(|r| (r.unit_floor_price.amount(), r.cost_performance))
            .collect::<Vec<_>>();
        assert_eq!(
            rounds,
            [
                (decimal("454133"), decimal("1.18")),
                (decimal("363306"), decimal("1.48")),
            ],
        );

        let mut values = service
            .execute(query::comparable_properties::ByCase::by(case_id))
            .await
            .unwrap()
            .iter()
            .map(|c| c.adjusted_value().amount())
            .collect::<Vec<_>>();
        values.sort();
        assert_eq!(values, [decimal("507692"), decimal("568125")]);
    }

    #[tokio::test]
    async fn replays_case_records() {
        let snapshot: Snapshot =
            serde_json::from_str(include_str!("../../demos/case.json"))
                .unwrap();
        let service = Service::new(Memory::new());

        let case_id = replay(&service, snapshot).await.unwrap();

        let surveys = service
            .execute(query::surveys::ByCase::by(case_id))
            .await
            .unwrap();
        assert_eq!(surveys.len(), 1);
        assert_eq!(surveys[0].links.count(), 2);
        assert_eq!(
            service
                .execute(query::final_decisions::ByCase::by(case_id))
                .await
                .unwrap()
                .len(),
            1,
        );
        assert_eq!(
            service
                .execute(query::outcomes::ByCase::by(case_id))
                .await
                .unwrap()[0]
                .bid_money
                .map(|m| m.amount()),
            Some(decimal("12880000")),
        );
    }

    #[test]
    fn names_failed_step() {
        let id = case::Id::new();

        let err =
            Error::from(recompute_case::ExecutionError::CaseNotExists(id));

        assert_eq!(
            err.to_string(),
            format!(
                "failed to recompute case: `Case(id: {id})` does not exist",
            ),
        );
    }
}
