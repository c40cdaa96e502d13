//! [`FinalDecision`]-related [`Database`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{case, final_decision, FinalDecision},
    infra::{
        database::{self, Memory},
        Database,
    },
};

impl Database<Select<By<Option<FinalDecision>, final_decision::Id>>>
    for Memory
{
    type Ok = Option<FinalDecision>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<FinalDecision>, final_decision::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let state = self.state.read().await;
        Ok(state.final_decisions.get(by.value()).cloned())
    }
}

impl Database<Select<By<Vec<FinalDecision>, case::Id>>> for Memory {
    type Ok = Vec<FinalDecision>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<FinalDecision>, case::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let case_id = by.into_inner();

        let state = self.state.read().await;
        let mut rows = state
            .final_decisions
            .values()
            .filter(|r| r.case_id == case_id)
            .cloned()
            .collect::<Vec<_>>();
        rows.sort_by_key(|r| (r.created_at, r.id));
        Ok(rows)
    }
}

impl Database<Insert<FinalDecision>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(final_decision): Insert<FinalDecision>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(final_decision)).await.map_err(tracerr::wrap!())
    }
}

impl Database<Update<FinalDecision>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(final_decision): Update<FinalDecision>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state.write().await;
        state
            .ensure_case(final_decision.case_id, "final_decisions")
            .map_err(tracerr::wrap!())?;
        _ = state.final_decisions.insert(final_decision.id, final_decision);
        Ok(())
    }
}

impl Database<Delete<FinalDecision>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(final_decision): Delete<FinalDecision>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state.write().await;
        _ = state.final_decisions.remove(&final_decision.id);
        Ok(())
    }
}
