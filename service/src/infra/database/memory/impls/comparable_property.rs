//! [`ComparableProperty`]-related [`Database`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{case, comparable_property, ComparableProperty},
    infra::{
        database::{self, Memory},
        Database,
    },
    read,
};

impl Database<Select<By<Option<ComparableProperty>, comparable_property::Id>>>
    for Memory
{
    type Ok = Option<ComparableProperty>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<Option<ComparableProperty>, comparable_property::Id>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let state = self.state.read().await;
        Ok(state.comparable_properties.get(by.value()).cloned())
    }
}

impl Database<Select<By<Vec<ComparableProperty>, case::Id>>> for Memory {
    type Ok = Vec<ComparableProperty>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<ComparableProperty>, case::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let case_id = by.into_inner();

        let state = self.state.read().await;
        let mut rows = state
            .comparable_properties
            .values()
            .filter(|r| r.case_id == case_id)
            .cloned()
            .collect::<Vec<_>>();
        rows.sort_by_key(|r| (r.created_at, r.id));
        Ok(rows)
    }
}

impl Database<Select<By<read::comparable_property::AdjustedValues, case::Id>>>
    for Memory
{
    type Ok = read::comparable_property::AdjustedValues;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<read::comparable_property::AdjustedValues, case::Id>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();

        Ok(self
            .execute(Select(By::<Vec<ComparableProperty>, _>::new(id)))
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(ComparableProperty::adjusted_value)
            .collect::<Vec<_>>()
            .into())
    }
}

impl Database<Insert<ComparableProperty>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(comparable): Insert<ComparableProperty>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(comparable)).await.map_err(tracerr::wrap!())
    }
}

impl Database<Update<ComparableProperty>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(comparable): Update<ComparableProperty>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state.write().await;
        state
            .ensure_case(comparable.case_id, "comparable_properties")
            .map_err(tracerr::wrap!())?;
        _ = state.comparable_properties.insert(comparable.id, comparable);
        Ok(())
    }
}

impl Database<Delete<ComparableProperty>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(comparable): Delete<ComparableProperty>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state.write().await;
        _ = state.comparable_properties.remove(&comparable.id);
        state
            .bonus_adjustments
            .retain(|_, b| b.comparable_id != comparable.id);
        Ok(())
    }
}
