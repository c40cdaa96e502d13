//! [`AuctionRound`]-related [`Database`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{auction_round, case, AuctionRound},
    infra::{
        database::{self, Memory},
        Database,
    },
};

impl Database<Select<By<Option<AuctionRound>, auction_round::Id>>> for Memory {
    type Ok = Option<AuctionRound>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<AuctionRound>, auction_round::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let state = self.state.read().await;
        Ok(state.auction_rounds.get(by.value()).cloned())
    }
}

impl Database<Select<By<Vec<AuctionRound>, case::Id>>> for Memory {
    type Ok = Vec<AuctionRound>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<AuctionRound>, case::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let case_id = by.into_inner();

        let state = self.state.read().await;
        let mut rows = state
            .auction_rounds
            .values()
            .filter(|r| r.case_id == case_id)
            .cloned()
            .collect::<Vec<_>>();
        rows.sort_by_key(|r| (r.created_at, r.id));
        Ok(rows)
    }
}

impl Database<Insert<AuctionRound>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(round): Insert<AuctionRound>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(round)).await.map_err(tracerr::wrap!())
    }
}

impl Database<Update<AuctionRound>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(round): Update<AuctionRound>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state.write().await;
        state
            .ensure_case(round.case_id, "auction_rounds")
            .map_err(tracerr::wrap!())?;
        _ = state.auction_rounds.insert(round.id, round);
        Ok(())
    }
}

impl Database<Delete<AuctionRound>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(round): Delete<AuctionRound>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state.write().await;
        _ = state.auction_rounds.remove(&round.id);
        Ok(())
    }
}
