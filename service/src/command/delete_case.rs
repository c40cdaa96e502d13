//! [`Command`] for deleting a [`Case`].

use common::operations::{By, Delete, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{case, Case},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for deleting a [`Case`] together with all its records.
#[derive(Clone, Copy, Debug, From)]
pub struct DeleteCase {
    /// ID of the [`Case`] to be deleted.
    pub case_id: case::Id,
}

impl<Db> Command<DeleteCase> for Service<Db>
where
    Db: Database<
            Select<By<Option<Case>, case::Id>>,
            Ok = Option<Case>,
            Err = Traced<database::Error>,
        > + Database<Delete<Case>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Case;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: DeleteCase) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteCase { case_id } = cmd;

        let case = self
            .database()
            .execute(Select(By::<Option<Case>, _>::new(case_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::CaseNotExists(case_id))
            .map_err(tracerr::wrap!())?;

        self.database()
            .execute(Delete(case.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(case)
    }
}

/// Error of [`DeleteCase`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Case`] with the provided ID does not exist.
    #[display("`Case(id: {_0})` does not exist")]
    CaseNotExists(#[error(not(source))] case::Id),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),
}

#[cfg(all(test, feature = "memory"))]
mod spec {
    use common::Rate;

    use crate::{
        command::{
            fixture, Command as _, CreateBonusAdjustment, CreateFinalDecision,
            CreateOutcome, CreatePerson, CreateSurvey,
        },
        domain::{final_decision, outcome, person, survey},
        query,
    };

    use super::{DeleteCase, ExecutionError};

    #[tokio::test]
    async fn removes_every_record_of_case() {
        let svc = fixture::service();
        let case = fixture::new_case(&svc).await;
        let other = fixture::new_case(&svc).await;
        let unit = fixture::new_building_unit(
            &svc,
            case.id,
            fixture::holding("100", 1, 1),
        )
        .await;
        _ = fixture::new_building_unit(
            &svc,
            other.id,
            fixture::holding("100", 1, 1),
        )
        .await;
        let comparable =
            fixture::new_comparable(&svc, case.id, "1000000", "30").await;
        let bonus = svc
            .execute(CreateBonusAdjustment {
                comparable_id: comparable.id,
                inspector_id: None,
                rate: "0.1".parse::<Rate>().unwrap(),
                reason: None,
            })
            .await
            .unwrap();
        _ = svc
            .execute(CreatePerson {
                case_id: case.id,
                name: person::Name::new("王小明").unwrap(),
                role: Some(person::Role::Debtor),
                phone: None,
            })
            .await
            .unwrap();
        _ = fixture::new_auction_round(&svc, case.id, "3000000").await;
        _ = svc
            .execute(CreateSurvey {
                case_id: case.id,
                first_day: survey::Day::new("10/01"),
                second_day: None,
                links: survey::Links::default(),
            })
            .await
            .unwrap();
        let decision = svc
            .execute(CreateFinalDecision {
                case_id: case.id,
                verdict: final_decision::Verdict::new("投"),
                category: None,
                remark: None,
                decision_maker: None,
                date: None,
                work_area: None,
            })
            .await
            .unwrap();
        _ = svc
            .execute(CreateOutcome {
                case_id: case.id,
                stop_buy_date: None,
                action: Some(outcome::Action::Withdrawn),
                bid_round: None,
                bid_money: None,
                object_number: None,
            })
            .await
            .unwrap();

        let deleted = svc
            .execute(DeleteCase { case_id: case.id })
            .await
            .unwrap();

        assert_eq!(deleted.id, case.id);
        assert!(svc
            .execute(query::case::ById::by(case.id))
            .await
            .unwrap()
            .is_none());
        assert!(svc
            .execute(query::building_unit::ById::by(unit.id))
            .await
            .unwrap()
            .is_none());
        assert!(svc
            .execute(query::bonus_adjustment::ById::by(bonus.id))
            .await
            .unwrap()
            .is_none());
        assert!(svc
            .execute(query::persons::ByCase::by(case.id))
            .await
            .unwrap()
            .is_empty());
        assert!(svc
            .execute(query::auction_rounds::ByCase::by(case.id))
            .await
            .unwrap()
            .is_empty());
        assert!(svc
            .execute(query::comparable_properties::ByCase::by(case.id))
            .await
            .unwrap()
            .is_empty());
        assert!(svc
            .execute(query::surveys::ByCase::by(case.id))
            .await
            .unwrap()
            .is_empty());
        assert!(svc
            .execute(query::final_decision::ById::by(decision.id))
            .await
            .unwrap()
            .is_none());
        assert!(svc
            .execute(query::outcomes::ByCase::by(case.id))
            .await
            .unwrap()
            .is_empty());
        assert_eq!(
            svc.execute(query::building_units::ByCase::by(other.id))
                .await
                .unwrap()
                .len(),
            1,
        );
    }

    #[tokio::test]
    async fn fails_on_missing_case() {
        let svc = fixture::service();
        let case = fixture::new_case(&svc).await;
        _ = svc.execute(DeleteCase { case_id: case.id }).await.unwrap();

        let err = svc
            .execute(DeleteCase { case_id: case.id })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::CaseNotExists(_)));
    }
}
