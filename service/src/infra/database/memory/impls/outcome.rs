//! [`Outcome`]-related [`Database`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{case, outcome, Outcome},
    infra::{
        database::{self, Memory},
        Database,
    },
};

impl Database<Select<By<Option<Outcome>, outcome::Id>>> for Memory {
    type Ok = Option<Outcome>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Outcome>, outcome::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let state = self.state.read().await;
        Ok(state.outcomes.get(by.value()).cloned())
    }
}

impl Database<Select<By<Vec<Outcome>, case::Id>>> for Memory {
    type Ok = Vec<Outcome>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Outcome>, case::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let case_id = by.into_inner();

        let state = self.state.read().await;
        let mut rows = state
            .outcomes
            .values()
            .filter(|r| r.case_id == case_id)
            .cloned()
            .collect::<Vec<_>>();
        rows.sort_by_key(|r| (r.created_at, r.id));
        Ok(rows)
    }
}

impl Database<Insert<Outcome>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(outcome): Insert<Outcome>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(outcome)).await.map_err(tracerr::wrap!())
    }
}

impl Database<Update<Outcome>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(outcome): Update<Outcome>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state.write().await;
        state
            .ensure_case(outcome.case_id, "outcomes")
            .map_err(tracerr::wrap!())?;
        _ = state.outcomes.insert(outcome.id, outcome);
        Ok(())
    }
}

impl Database<Delete<Outcome>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(outcome): Delete<Outcome>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state.write().await;
        _ = state.outcomes.remove(&outcome.id);
        Ok(())
    }
}
