//! [`Command`] for deleting a [`FinalDecision`].

use common::operations::{By, Delete, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{final_decision, FinalDecision},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for removing a [`FinalDecision`] from its case.
#[derive(Clone, Copy, Debug, From)]
pub struct DeleteFinalDecision {
    /// ID of the [`FinalDecision`] to be deleted.
    pub final_decision_id: final_decision::Id,
}

impl<Db> Command<DeleteFinalDecision> for Service<Db>
where
    Db: Database<
            Select<By<Option<FinalDecision>, final_decision::Id>>,
            Ok = Option<FinalDecision>,
            Err = Traced<database::Error>,
        > + Database<
            Delete<FinalDecision>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
{
    type Ok = FinalDecision;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeleteFinalDecision,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteFinalDecision { final_decision_id } = cmd;

        let final_decision = self
            .database()
            .execute(Select(By::<Option<FinalDecision>, _>::new(
                final_decision_id,
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::FinalDecisionNotExists(final_decision_id))
            .map_err(tracerr::wrap!())?;

        self.database()
            .execute(Delete(final_decision.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(final_decision)
    }
}

/// Error of [`DeleteFinalDecision`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`FinalDecision`] with the provided ID does not exist.
    #[display("`FinalDecision(id: {_0})` does not exist")]
    FinalDecisionNotExists(#[error(not(source))] final_decision::Id),
}
