//! [`Case`]-related [`Database`] implementations.

use std::collections::HashSet;

use common::operations::{By, Delete, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{case, user, Case},
    infra::{
        database::{self, Memory},
        Database,
    },
};

impl Database<Select<By<Option<Case>, case::Id>>> for Memory {
    type Ok = Option<Case>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Case>, case::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let state = self.state.read().await;
        Ok(state.cases.get(by.value()).cloned())
    }
}

impl Database<Select<By<Vec<Case>, user::Id>>> for Memory {
    type Ok = Vec<Case>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Case>, user::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let owner_id = by.into_inner();

        let state = self.state.read().await;
        let mut cases = state
            .cases
            .values()
            .filter(|c| c.owner_id == owner_id)
            .cloned()
            .collect::<Vec<_>>();
        cases.sort_by(|a, b| a.number.cmp(&b.number).then(a.id.cmp(&b.id)));
        Ok(cases)
    }
}

impl Database<Insert<Case>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(case): Insert<Case>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(case)).await.map_err(tracerr::wrap!())
    }
}

impl Database<Update<Case>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(case): Update<Case>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state.write().await;
        _ = state.cases.insert(case.id, case);
        Ok(())
    }
}

impl Database<Delete<Case>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(case): Delete<Case>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state.write().await;

        _ = state.cases.remove(&case.id);
        state.land_parcels.retain(|_, p| p.case_id != case.id);
        state.building_units.retain(|_, u| u.case_id != case.id);
        state.persons.retain(|_, p| p.case_id != case.id);
        state.auction_rounds.retain(|_, r| r.case_id != case.id);
        state.surveys.retain(|_, s| s.case_id != case.id);
        state.final_decisions.retain(|_, d| d.case_id != case.id);
        state.outcomes.retain(|_, o| o.case_id != case.id);

        let mut comparable_ids = HashSet::new();
        state.comparable_properties.retain(|id, c| {
            let keep = c.case_id != case.id;
            if !keep {
                _ = comparable_ids.insert(*id);
            }
            keep
        });
        state
            .bonus_adjustments
            .retain(|_, b| !comparable_ids.contains(&b.comparable_id));

        Ok(())
    }
}
