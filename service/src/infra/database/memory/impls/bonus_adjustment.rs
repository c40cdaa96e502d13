//! [`BonusAdjustment`]-related [`Database`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{bonus_adjustment, comparable_property, BonusAdjustment},
    infra::{
        database::{self, Memory},
        Database,
    },
    read,
};

impl Database<Select<By<Option<BonusAdjustment>, bonus_adjustment::Id>>>
    for Memory
{
    type Ok = Option<BonusAdjustment>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<BonusAdjustment>, bonus_adjustment::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let state = self.state.read().await;
        Ok(state.bonus_adjustments.get(by.value()).cloned())
    }
}

impl Database<Select<By<Vec<BonusAdjustment>, comparable_property::Id>>>
    for Memory
{
    type Ok = Vec<BonusAdjustment>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<BonusAdjustment>, comparable_property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let comparable_id = by.into_inner();

        let state = self.state.read().await;
        let mut rows = state
            .bonus_adjustments
            .values()
            .filter(|r| r.comparable_id == comparable_id)
            .cloned()
            .collect::<Vec<_>>();
        rows.sort_by_key(|r| (r.created_at, r.id));
        Ok(rows)
    }
}

impl
    Database<
        Select<By<read::bonus_adjustment::Rates, comparable_property::Id>>,
    >
    for Memory
{
    type Ok = read::bonus_adjustment::Rates;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<read::bonus_adjustment::Rates, comparable_property::Id>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();

        Ok(self
            .execute(Select(By::<Vec<BonusAdjustment>, _>::new(id)))
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(|b| b.rate)
            .collect::<Vec<_>>()
            .into())
    }
}

impl Database<Insert<BonusAdjustment>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(bonus): Insert<BonusAdjustment>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(bonus)).await.map_err(tracerr::wrap!())
    }
}

impl Database<Update<BonusAdjustment>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(bonus): Update<BonusAdjustment>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state.write().await;
        state
            .ensure_comparable_property(
                bonus.comparable_id,
                "bonus_adjustments",
            )
            .map_err(tracerr::wrap!())?;
        _ = state.bonus_adjustments.insert(bonus.id, bonus);
        Ok(())
    }
}

impl Database<Delete<BonusAdjustment>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(bonus): Delete<BonusAdjustment>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state.write().await;
        _ = state.bonus_adjustments.remove(&bonus.id);
        Ok(())
    }
}
