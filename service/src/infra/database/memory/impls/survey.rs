//! [`Survey`]-related [`Database`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{case, survey, Survey},
    infra::{
        database::{self, Memory},
        Database,
    },
};

impl Database<Select<By<Option<Survey>, survey::Id>>> for Memory {
    type Ok = Option<Survey>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Survey>, survey::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let state = self.state.read().await;
        Ok(state.surveys.get(by.value()).cloned())
    }
}

impl Database<Select<By<Vec<Survey>, case::Id>>> for Memory {
    type Ok = Vec<Survey>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Survey>, case::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let case_id = by.into_inner();

        let state = self.state.read().await;
        let mut rows = state
            .surveys
            .values()
            .filter(|r| r.case_id == case_id)
            .cloned()
            .collect::<Vec<_>>();
        rows.sort_by_key(|r| (r.created_at, r.id));
        Ok(rows)
    }
}

impl Database<Insert<Survey>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(survey): Insert<Survey>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(survey)).await.map_err(tracerr::wrap!())
    }
}

impl Database<Update<Survey>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(survey): Update<Survey>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state.write().await;
        state
            .ensure_case(survey.case_id, "surveys")
            .map_err(tracerr::wrap!())?;
        _ = state.surveys.insert(survey.id, survey);
        Ok(())
    }
}

impl Database<Delete<Survey>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(survey): Delete<Survey>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state.write().await;
        _ = state.surveys.remove(&survey.id);
        Ok(())
    }
}
