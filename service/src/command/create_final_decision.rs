//! [`Command`] for creating a new [`FinalDecision`].

use common::{
    operations::{By, Insert, Select},
    Date, DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{case, final_decision, Case, FinalDecision},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for adding a new [`FinalDecision`] to a [`Case`].
#[derive(Clone, Debug)]
pub struct CreateFinalDecision {
    /// ID of the [`Case`] a new [`FinalDecision`] belongs to.
    pub case_id: case::Id,

    /// [`final_decision::Verdict`] of a new [`FinalDecision`].
    pub verdict: Option<final_decision::Verdict>,

    /// [`final_decision::Category`] of a new [`FinalDecision`].
    pub category: Option<final_decision::Category>,

    /// [`final_decision::Remark`] of a new [`FinalDecision`].
    pub remark: Option<final_decision::Remark>,

    /// [`final_decision::DecisionMaker`] of a new [`FinalDecision`].
    pub decision_maker: Option<final_decision::DecisionMaker>,

    /// [`Date`] of a new [`FinalDecision`].
    pub date: Option<Date>,

    /// [`final_decision::WorkArea`] of a new [`FinalDecision`].
    pub work_area: Option<final_decision::WorkArea>,
}

impl<Db> Command<CreateFinalDecision> for Service<Db>
where
    Db: Database<
            Select<By<Option<Case>, case::Id>>,
            Ok = Option<Case>,
            Err = Traced<database::Error>,
        > + Database<
            Insert<FinalDecision>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
{
    type Ok = FinalDecision;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateFinalDecision,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateFinalDecision {
            case_id,
            verdict,
            category,
            remark,
            decision_maker,
            date,
            work_area,
        } = cmd;

        self.database()
            .execute(Select(By::<Option<Case>, _>::new(case_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::CaseNotExists(case_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        let now = DateTime::now();
        let final_decision = FinalDecision {
            id: final_decision::Id::new(),
            case_id,
            verdict,
            category,
            remark,
            decision_maker,
            date,
            work_area,
            created_at: now.coerce(),
            updated_at: now.coerce(),
        };

        self.database()
            .execute(Insert(final_decision.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(final_decision)
    }
}

/// Error of [`CreateFinalDecision`] [`Command`] execution.
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
    use common::Date;

    use crate::{
        command::{fixture, Command as _},
        domain::{case, final_decision},
        query,
    };

    use super::{CreateFinalDecision, ExecutionError};

    #[tokio::test]
    async fn records_decision_on_case() {
        let svc = fixture::service();
        let case = fixture::new_case(&svc).await;

        let decision = svc
            .execute(CreateFinalDecision {
                case_id: case.id,
                verdict: final_decision::Verdict::new("投"),
                category: None,
                remark: final_decision::Remark::new("第二拍底價合理"),
                decision_maker: final_decision::DecisionMaker::new("林經理"),
                date: Date::from_calendar(2024, 11, 12),
                work_area: final_decision::WorkArea::new("台北"),
            })
            .await
            .unwrap();

        assert_eq!(
            svc.execute(query::final_decisions::ByCase::by(case.id))
                .await
                .unwrap(),
            vec![decision],
        );
    }

    #[tokio::test]
    async fn fails_on_missing_case() {
        let svc = fixture::service();

        let err = svc
            .execute(CreateFinalDecision {
                case_id: case::Id::new(),
                verdict: None,
                category: None,
                remark: None,
                decision_maker: None,
                date: None,
                work_area: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::CaseNotExists(_)));
    }
}
