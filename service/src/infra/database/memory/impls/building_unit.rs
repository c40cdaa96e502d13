//! [`BuildingUnit`]-related [`Database`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{building_unit, case, BuildingUnit},
    infra::{
        database::{self, Memory},
        Database,
    },
    read,
};

impl Database<Select<By<Option<BuildingUnit>, building_unit::Id>>> for Memory {
    type Ok = Option<BuildingUnit>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<BuildingUnit>, building_unit::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let state = self.state.read().await;
        Ok(state.building_units.get(by.value()).cloned())
    }
}

impl Database<Select<By<Vec<BuildingUnit>, case::Id>>> for Memory {
    type Ok = Vec<BuildingUnit>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<BuildingUnit>, case::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let case_id = by.into_inner();

        let state = self.state.read().await;
        let mut rows = state
            .building_units
            .values()
            .filter(|r| r.case_id == case_id)
            .cloned()
            .collect::<Vec<_>>();
        rows.sort_by_key(|r| (r.created_at, r.id));
        Ok(rows)
    }
}

impl Database<Select<By<read::building_unit::ConvertedAreas, case::Id>>>
    for Memory
{
    type Ok = read::building_unit::ConvertedAreas;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<read::building_unit::ConvertedAreas, case::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();

        Ok(self
            .execute(Select(By::<Vec<BuildingUnit>, _>::new(id)))
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(BuildingUnit::converted_area)
            .collect::<Vec<_>>()
            .into())
    }
}

impl Database<Insert<BuildingUnit>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(unit): Insert<BuildingUnit>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(unit)).await.map_err(tracerr::wrap!())
    }
}

impl Database<Update<BuildingUnit>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(unit): Update<BuildingUnit>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state.write().await;
        state
            .ensure_case(unit.case_id, "building_units")
            .map_err(tracerr::wrap!())?;
        _ = state.building_units.insert(unit.id, unit);
        Ok(())
    }
}

impl Database<Delete<BuildingUnit>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(unit): Delete<BuildingUnit>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state.write().await;
        _ = state.building_units.remove(&unit.id);
        Ok(())
    }
}
