//! [`Command`] for updating a [`FinalDecision`].

use common::{
    operations::{By, Select, Update},
    Date, DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{final_decision, FinalDecision},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating a [`FinalDecision`].
#[derive(Clone, Debug)]
pub struct UpdateFinalDecision {
    /// ID of the [`FinalDecision`] to be updated.
    pub final_decision_id: final_decision::Id,

    /// New [`final_decision::Verdict`] of the [`FinalDecision`].
    pub verdict: Option<final_decision::Verdict>,

    /// New [`final_decision::Category`] of the [`FinalDecision`].
    pub category: Option<final_decision::Category>,

    /// New [`final_decision::Remark`] of the [`FinalDecision`].
    pub remark: Option<final_decision::Remark>,

    /// New [`final_decision::DecisionMaker`] of the [`FinalDecision`].
    pub decision_maker: Option<final_decision::DecisionMaker>,

    /// New [`Date`] of the [`FinalDecision`].
    pub date: Option<Date>,

    /// New [`final_decision::WorkArea`] of the [`FinalDecision`].
    pub work_area: Option<final_decision::WorkArea>,
}

impl<Db> Command<UpdateFinalDecision> for Service<Db>
where
    Db: Database<
            Select<By<Option<FinalDecision>, final_decision::Id>>,
            Ok = Option<FinalDecision>,
            Err = Traced<database::Error>,
        > + Database<
            Update<FinalDecision>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
{
    type Ok = FinalDecision;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateFinalDecision,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateFinalDecision {
            final_decision_id,
            verdict,
            category,
            remark,
            decision_maker,
            date,
            work_area,
        } = cmd;

        let mut final_decision = self
            .database()
            .execute(Select(By::<Option<FinalDecision>, _>::new(
                final_decision_id,
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::FinalDecisionNotExists(final_decision_id))
            .map_err(tracerr::wrap!())?;

        final_decision.verdict = verdict;
        final_decision.category = category;
        final_decision.remark = remark;
        final_decision.decision_maker = decision_maker;
        final_decision.date = date;
        final_decision.work_area = work_area;
        final_decision.updated_at = DateTime::now().coerce();

        self.database()
            .execute(Update(final_decision.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(final_decision)
    }
}

/// Error of [`UpdateFinalDecision`] [`Command`] execution.
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
