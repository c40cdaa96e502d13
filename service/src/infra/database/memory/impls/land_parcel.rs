//! [`LandParcel`]-related [`Database`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{case, land_parcel, LandParcel},
    infra::{
        database::{self, Memory},
        Database,
    },
    read,
};

impl Database<Select<By<Option<LandParcel>, land_parcel::Id>>> for Memory {
    type Ok = Option<LandParcel>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<LandParcel>, land_parcel::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let state = self.state.read().await;
        Ok(state.land_parcels.get(by.value()).cloned())
    }
}

impl Database<Select<By<Vec<LandParcel>, case::Id>>> for Memory {
    type Ok = Vec<LandParcel>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<LandParcel>, case::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let case_id = by.into_inner();

        let state = self.state.read().await;
        let mut rows = state
            .land_parcels
            .values()
            .filter(|r| r.case_id == case_id)
            .cloned()
            .collect::<Vec<_>>();
        rows.sort_by_key(|r| (r.created_at, r.id));
        Ok(rows)
    }
}

impl Database<Select<By<read::land_parcel::ConvertedAreas, case::Id>>>
    for Memory
{
    type Ok = read::land_parcel::ConvertedAreas;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<read::land_parcel::ConvertedAreas, case::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();

        Ok(self
            .execute(Select(By::<Vec<LandParcel>, _>::new(id)))
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(LandParcel::converted_area)
            .collect::<Vec<_>>()
            .into())
    }
}

impl Database<Insert<LandParcel>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(parcel): Insert<LandParcel>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(parcel)).await.map_err(tracerr::wrap!())
    }
}

impl Database<Update<LandParcel>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(parcel): Update<LandParcel>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state.write().await;
        state
            .ensure_case(parcel.case_id, "land_parcels")
            .map_err(tracerr::wrap!())?;
        _ = state.land_parcels.insert(parcel.id, parcel);
        Ok(())
    }
}

impl Database<Delete<LandParcel>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(parcel): Delete<LandParcel>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state.write().await;
        _ = state.land_parcels.remove(&parcel.id);
        Ok(())
    }
}
