//! [`Command`] for creating a new [`Outcome`].

use common::{
    operations::{By, Insert, Select},
    Date, DateTime, Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{auction_round, case, outcome, Case, Outcome},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for adding a new [`Outcome`] to a [`Case`].
#[derive(Clone, Debug)]
pub struct CreateOutcome {
    /// ID of the [`Case`] a new [`Outcome`] belongs to.
    pub case_id: case::Id,

    /// [`Date`] a new [`Outcome`] stopped the purchase on.
    pub stop_buy_date: Option<Date>,

    /// [`outcome::Action`] of a new [`Outcome`].
    pub action: Option<outcome::Action>,

    /// [`auction_round::Round`] the bid of a new [`Outcome`] was placed in.
    pub bid_round: Option<auction_round::Round>,

    /// Amount of the bid of a new [`Outcome`].
    pub bid_money: Option<Money>,

    /// [`outcome::ObjectNumber`] of a new [`Outcome`].
    pub object_number: Option<outcome::ObjectNumber>,
}

impl<Db> Command<CreateOutcome> for Service<Db>
where
    Db: Database<
            Select<By<Option<Case>, case::Id>>,
            Ok = Option<Case>,
            Err = Traced<database::Error>,
        > + Database<Insert<Outcome>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Outcome;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CreateOutcome) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateOutcome {
            case_id,
            stop_buy_date,
            action,
            bid_round,
            bid_money,
            object_number,
        } = cmd;

        self.database()
            .execute(Select(By::<Option<Case>, _>::new(case_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::CaseNotExists(case_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        let now = DateTime::now();
        let outcome = Outcome {
            id: outcome::Id::new(),
            case_id,
            stop_buy_date,
            action,
            bid_round,
            bid_money,
            object_number,
            created_at: now.coerce(),
            updated_at: now.coerce(),
        };

        self.database()
            .execute(Insert(outcome.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(outcome)
    }
}

/// Error of [`CreateOutcome`] [`Command`] execution.
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
    use crate::{
        command::{fixture, Command as _},
        domain::{auction_round, case, outcome},
        query,
    };

    use super::{CreateOutcome, ExecutionError};

    #[tokio::test]
    async fn records_bid_outcome() {
        let svc = fixture::service();
        let case = fixture::new_case(&svc).await;

        let outcome = svc
            .execute(CreateOutcome {
                case_id: case.id,
                stop_buy_date: None,
                action: Some(outcome::Action::OutbidByThirdParty),
                bid_round: Some(auction_round::Round::Second),
                bid_money: Some(fixture::money("12880000")),
                object_number: outcome::ObjectNumber::new("甲"),
            })
            .await
            .unwrap();

        assert_eq!(
            svc.execute(query::outcome::ById::by(outcome.id))
                .await
                .unwrap(),
            Some(outcome.clone()),
        );
        assert_eq!(
            svc.execute(query::outcomes::ByCase::by(case.id))
                .await
                .unwrap(),
            vec![outcome],
        );
    }

    #[tokio::test]
    async fn fails_on_missing_case() {
        let svc = fixture::service();

        let err = svc
            .execute(CreateOutcome {
                case_id: case::Id::new(),
                stop_buy_date: None,
                action: None,
                bid_round: None,
                bid_money: None,
                object_number: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::CaseNotExists(_)));
    }
}
