//! [`Command`] for updating an [`Outcome`].

use common::{
    operations::{By, Select, Update},
    Date, DateTime, Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{auction_round, outcome, Outcome},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating an [`Outcome`].
#[derive(Clone, Debug)]
pub struct UpdateOutcome {
    /// ID of the [`Outcome`] to be updated.
    pub outcome_id: outcome::Id,

    /// New [`Date`] the [`Outcome`] stopped the purchase on.
    pub stop_buy_date: Option<Date>,

    /// New [`outcome::Action`] of the [`Outcome`].
    pub action: Option<outcome::Action>,

    /// New [`auction_round::Round`] the bid was placed in.
    pub bid_round: Option<auction_round::Round>,

    /// New amount of the bid of the [`Outcome`].
    pub bid_money: Option<Money>,

    /// New [`outcome::ObjectNumber`] of the [`Outcome`].
    pub object_number: Option<outcome::ObjectNumber>,
}

impl<Db> Command<UpdateOutcome> for Service<Db>
where
    Db: Database<
            Select<By<Option<Outcome>, outcome::Id>>,
            Ok = Option<Outcome>,
            Err = Traced<database::Error>,
        > + Database<Update<Outcome>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Outcome;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: UpdateOutcome) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateOutcome {
            outcome_id,
            stop_buy_date,
            action,
            bid_round,
            bid_money,
            object_number,
        } = cmd;

        let mut outcome = self
            .database()
            .execute(Select(By::<Option<Outcome>, _>::new(outcome_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::OutcomeNotExists(outcome_id))
            .map_err(tracerr::wrap!())?;

        outcome.stop_buy_date = stop_buy_date;
        outcome.action = action;
        outcome.bid_round = bid_round;
        outcome.bid_money = bid_money;
        outcome.object_number = object_number;
        outcome.updated_at = DateTime::now().coerce();

        self.database()
            .execute(Update(outcome.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(outcome)
    }
}

/// Error of [`UpdateOutcome`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Outcome`] with the provided ID does not exist.
    #[display("`Outcome(id: {_0})` does not exist")]
    OutcomeNotExists(#[error(not(source))] outcome::Id),
}

#[cfg(all(test, feature = "memory"))]
mod spec {
    use common::Date;

    use crate::{
        command::{fixture, Command as _, CreateOutcome},
        domain::{auction_round, outcome},
    };

    use super::{ExecutionError, UpdateOutcome};

    #[tokio::test]
    async fn settles_pending_preemption() {
        let svc = fixture::service();
        let case = fixture::new_case(&svc).await;
        let pending = svc
            .execute(CreateOutcome {
                case_id: case.id,
                stop_buy_date: None,
                action: Some(outcome::Action::AwaitingPreemption),
                bid_round: Some(auction_round::Round::First),
                bid_money: Some(fixture::money("15200000")),
                object_number: None,
            })
            .await
            .unwrap();

        let settled = svc
            .execute(UpdateOutcome {
                outcome_id: pending.id,
                stop_buy_date: Date::from_calendar(2024, 10, 25),
                action: Some(outcome::Action::Preempted),
                bid_round: pending.bid_round,
                bid_money: pending.bid_money,
                object_number: None,
            })
            .await
            .unwrap();

        assert_eq!(settled.id, pending.id);
        assert_eq!(settled.action, Some(outcome::Action::Preempted));
        assert_eq!(settled.bid_money, Some(fixture::money("15200000")));
        assert!(settled.stop_buy_date.is_some());
    }

    #[tokio::test]
    async fn fails_on_missing_outcome() {
        let svc = fixture::service();

        let err = svc
            .execute(UpdateOutcome {
                outcome_id: outcome::Id::new(),
                stop_buy_date: None,
                action: None,
                bid_round: None,
                bid_money: None,
                object_number: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::OutcomeNotExists(_)));
    }
}
