//! [`Command`] for deleting an [`Outcome`].

use common::operations::{By, Delete, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{outcome, Outcome},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for removing an [`Outcome`] from its case.
#[derive(Clone, Copy, Debug, From)]
pub struct DeleteOutcome {
    /// ID of the [`Outcome`] to be deleted.
    pub outcome_id: outcome::Id,
}

impl<Db> Command<DeleteOutcome> for Service<Db>
where
    Db: Database<
            Select<By<Option<Outcome>, outcome::Id>>,
            Ok = Option<Outcome>,
            Err = Traced<database::Error>,
        > + Database<Delete<Outcome>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Outcome;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: DeleteOutcome) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteOutcome { outcome_id } = cmd;

        let outcome = self
            .database()
            .execute(Select(By::<Option<Outcome>, _>::new(outcome_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::OutcomeNotExists(outcome_id))
            .map_err(tracerr::wrap!())?;

        self.database()
            .execute(Delete(outcome.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(outcome)
    }
}

/// Error of [`DeleteOutcome`] [`Command`] execution.
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
